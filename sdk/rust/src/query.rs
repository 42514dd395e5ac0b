//! Filter values and their query string form
//!
//! A [`FilterValues`] holds the raw min/max text the user typed for each
//! field, in a fixed order. Only non-empty bounds reach the query string,
//! as `<field>_min` / `<field>_max`.

use url::form_urlencoded;

/// Leaderboard fields, in display order
pub const TRADER_FILTER_KEYS: &[&str] = &[
    "rank",
    "followers",
    "tokens",
    "winRate",
    "avgBuy",
    "avgEntry",
    "realizedPNL",
];

/// Trade history fields, in display order
pub const TRADE_FILTER_KEYS: &[&str] = &[
    "lastTrade",
    "marketCap",
    "invested",
    "realizedPNL",
    "roi",
    "holding",
    "avgBuy",
    "avgSell",
    "held",
    "winRate",
    "pnlPercentage",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Min,
    Max,
}

impl BoundKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }
}

/// Raw min/max text for one field; empty means "no bound"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeInput {
    pub min: String,
    pub max: String,
}

impl RangeInput {
    pub fn get(&self, kind: BoundKind) -> &str {
        match kind {
            BoundKind::Min => &self.min,
            BoundKind::Max => &self.max,
        }
    }

    fn slot(&mut self, kind: BoundKind) -> &mut String {
        match kind {
            BoundKind::Min => &mut self.min,
            BoundKind::Max => &mut self.max,
        }
    }

    fn active(&self) -> usize {
        usize::from(!self.min.is_empty()) + usize::from(!self.max.is_empty())
    }
}

/// Ordered field -> range map for one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterValues {
    entries: Vec<(&'static str, RangeInput)>,
}

impl FilterValues {
    fn with_keys(keys: &[&'static str]) -> Self {
        Self {
            entries: keys.iter().map(|&k| (k, RangeInput::default())).collect(),
        }
    }

    /// Empty filters for the leaderboard
    pub fn traders() -> Self {
        Self::with_keys(TRADER_FILTER_KEYS)
    }

    /// Empty filters for a trade history
    pub fn trades() -> Self {
        Self::with_keys(TRADE_FILTER_KEYS)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn get(&self, key: &str) -> Option<&RangeInput> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    /// Set one bound. Returns false when `key` is not a field of this set.
    pub fn set(&mut self, key: &str, kind: BoundKind, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, range)) => {
                *range.slot(kind) = value.into();
                true
            }
            None => false,
        }
    }

    /// Clear every bound, keeping the field set
    pub fn clear(&mut self) {
        for (_, range) in &mut self.entries {
            *range = RangeInput::default();
        }
    }

    /// Number of non-empty bounds (the badge count next to the filter button)
    pub fn active_count(&self) -> usize {
        self.entries.iter().map(|(_, r)| r.active()).sum()
    }

    /// Non-empty bounds as query pairs, in field order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, range) in &self.entries {
            for kind in [BoundKind::Min, BoundKind::Max] {
                let value = range.get(kind);
                if !value.is_empty() {
                    pairs.push((format!("{}_{}", key, kind.as_str()), value.to_string()));
                }
            }
        }
        pairs
    }

    /// `application/x-www-form-urlencoded` query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }

    /// Restore filters from URL query pairs on top of `template`.
    ///
    /// Each key is split on `_` and its first two parts read as field and
    /// bound; pairs naming an unknown field or a part other than `min`/`max`
    /// are skipped. Later duplicates overwrite earlier ones.
    pub fn from_query_pairs<I, K, V>(template: Self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = template;
        for (key, value) in pairs {
            let mut parts = key.as_ref().split('_');
            let field = parts.next().unwrap_or_default();
            let Some(kind) = parts.next().and_then(BoundKind::parse) else {
                continue;
            };
            filters.set(field, kind, value);
        }
        filters
    }

    /// Restore filters from a raw query string (leading `?` allowed)
    pub fn from_query_string(template: Self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_query_pairs(
            template,
            form_urlencoded::parse(query.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }
}
