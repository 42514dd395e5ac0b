//! Client-side table model: sorting, fuzzy global search and pagination
//!
//! Rows flow through three stages on every [`Table::row_model`] call:
//! global filter, then sort, then page slice. The table never owns the
//! data; it borrows whatever the last fetch produced.

use std::cmp::Ordering;

use crate::types::{Trade, Trader};

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sortable/searchable value extracted from a row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    fn search_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

pub struct Column<T> {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    /// Whether the global search looks at this column
    pub global_filter: bool,
    accessor: fn(&T) -> CellValue,
}

impl<T> Column<T> {
    pub fn new(id: &'static str, header: &'static str, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            id,
            header,
            sortable: true,
            global_filter: false,
            accessor,
        }
    }

    pub fn searchable(mut self) -> Self {
        self.global_filter = true;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("sortable", &self.sortable)
            .field("global_filter", &self.global_filter)
            .finish()
    }
}

// ============================================================================
// Fuzzy ranking
// ============================================================================

/// How well a cell matched the search text, best first
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ranking {
    CaseSensitiveEqual,
    Equal,
    StartsWith,
    WordStartsWith,
    Contains,
    Acronym,
    /// Characters appear in order; closeness in `(0, 1]` from how tightly
    Matches(f64),
    NoMatch,
}

impl Ranking {
    pub fn score(self) -> f64 {
        match self {
            Self::CaseSensitiveEqual => 7.0,
            Self::Equal => 6.0,
            Self::StartsWith => 5.0,
            Self::WordStartsWith => 4.0,
            Self::Contains => 3.0,
            Self::Acronym => 2.0,
            Self::Matches(closeness) => 1.0 + closeness,
            Self::NoMatch => 0.0,
        }
    }

    pub fn passed(self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// First letters of every space- or hyphen-separated word
fn acronym(s: &str) -> String {
    s.split(' ')
        .flat_map(|word| word.split('-'))
        .filter_map(|part| part.chars().next())
        .collect()
}

/// In-order character match; closeness is `1 / spread`
fn closeness_ranking(item: &[char], query: &[char]) -> Ranking {
    let mut next = 0;
    let mut find = |c: char| -> Option<usize> {
        let pos = item[next..].iter().position(|&ic| ic == c)? + next;
        next = pos + 1;
        Some(next)
    };

    let Some(&first) = query.first() else {
        return Ranking::NoMatch;
    };
    let Some(first_index) = find(first) else {
        return Ranking::NoMatch;
    };
    let mut last_index = first_index;
    for &c in &query[1..] {
        match find(c) {
            Some(i) => last_index = i,
            None => return Ranking::NoMatch,
        }
    }

    let spread = (last_index - first_index).max(1);
    Ranking::Matches(1.0 / spread as f64)
}

/// Rank `item` against `query`, case-insensitively past the exact check
pub fn rank_item(item: &str, query: &str) -> Ranking {
    if query.chars().count() > item.chars().count() {
        return Ranking::NoMatch;
    }
    if item == query {
        return Ranking::CaseSensitiveEqual;
    }

    let item = item.to_lowercase();
    let query = query.to_lowercase();

    if item == query {
        return Ranking::Equal;
    }
    if item.starts_with(&query) {
        return Ranking::StartsWith;
    }
    if item.contains(&format!(" {}", query)) {
        return Ranking::WordStartsWith;
    }
    if item.contains(&query) {
        return Ranking::Contains;
    }
    if query.chars().count() == 1 {
        return Ranking::NoMatch;
    }
    if acronym(&item).contains(&query) {
        return Ranking::Acronym;
    }

    let item: Vec<char> = item.chars().collect();
    let query: Vec<char> = query.chars().collect();
    closeness_ranking(&item, &query)
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub column: String,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Compare text with digit runs taken as numbers: `"9 min" < "45 min"`
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();
    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let take_digits = |it: &mut std::iter::Peekable<std::str::Chars<'_>>| {
                    let mut digits = String::new();
                    while let Some(c) = it.next_if(char::is_ascii_digit) {
                        digits.push(c);
                    }
                    digits
                };
                let da = take_digits(&mut a);
                let db = take_digits(&mut b);
                let ta = da.trim_start_matches('0');
                let tb = db.trim_start_matches('0');
                let ord = ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a.next();
                b.next();
            }
        }
    }
}

/// Ascending order; NaN sorts after every number, numbers before text
fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x
            .partial_cmp(y)
            .unwrap_or_else(|| x.is_nan().cmp(&y.is_nan())),
        (CellValue::Text(x), CellValue::Text(y)) => natural_cmp(&x.to_lowercase(), &y.to_lowercase()),
        (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
        (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
    }
}

// ============================================================================
// Table
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub sorting: Vec<ColumnSort>,
    pub global_filter: String,
    pub pagination: Pagination,
}

/// Visible rows for the current state
#[derive(Debug)]
pub struct RowModel<'a, T> {
    /// Every row passing the global filter, sorted
    pub rows: Vec<&'a T>,
    /// The slice of `rows` on the current page
    pub page_rows: Vec<&'a T>,
    pub page_index: usize,
    pub page_count: usize,
}

impl<T> RowModel<'_, T> {
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

#[derive(Debug)]
pub struct Table<T> {
    columns: Vec<Column<T>>,
    state: TableState,
}

impl<T> Table<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            state: TableState::default(),
        }
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Replace the sort order; unknown or unsortable columns are dropped
    pub fn set_sorting(&mut self, sorting: Vec<ColumnSort>) {
        self.state.sorting = sorting
            .into_iter()
            .filter(|s| self.column(&s.column).is_some_and(|c| c.sortable))
            .collect();
    }

    /// Header click: unsorted -> ascending -> descending -> unsorted, single column
    pub fn toggle_sort(&mut self, column: &str) {
        let next = match self.state.sorting.iter().find(|s| s.column == column) {
            None => Some(ColumnSort::asc(column)),
            Some(s) if s.direction == SortDirection::Asc => Some(ColumnSort::desc(column)),
            Some(_) => None,
        };
        self.set_sorting(next.into_iter().collect());
    }

    /// Set the search text and go back to the first page
    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        self.state.global_filter = query.into();
        self.state.pagination.page_index = 0;
    }

    /// Change page size, keeping the current top row on screen
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let top_row = self.state.pagination.page_index * self.state.pagination.page_size;
        self.state.pagination = Pagination {
            page_index: top_row / page_size,
            page_size,
        };
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.state.pagination.page_index = page_index;
    }

    pub fn next_page(&mut self) {
        self.state.pagination.page_index += 1;
    }

    pub fn previous_page(&mut self) {
        self.state.pagination.page_index = self.state.pagination.page_index.saturating_sub(1);
    }

    /// Best ranking of the query over the searchable columns of `row`
    fn row_ranking(&self, row: &T, query: &str) -> Ranking {
        self.columns
            .iter()
            .filter(|c| c.global_filter)
            .map(|c| rank_item(&c.value(row).search_text(), query))
            .max_by(|a, b| a.score().total_cmp(&b.score()))
            .unwrap_or(Ranking::NoMatch)
    }

    fn compare_rows(&self, a: &T, b: &T) -> Ordering {
        for sort in &self.state.sorting {
            let Some(column) = self.column(&sort.column) else {
                continue;
            };
            let ord = compare_cells(&column.value(a), &column.value(b));
            let ord = match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    pub fn row_model<'a>(&self, data: &'a [T]) -> RowModel<'a, T> {
        let query = self.state.global_filter.trim();

        let mut rows: Vec<&'a T> = if query.is_empty() {
            data.iter().collect()
        } else {
            let mut ranked: Vec<(&'a T, f64)> = data
                .iter()
                .filter_map(|row| {
                    let ranking = self.row_ranking(row, query);
                    ranking.passed().then(|| (row, ranking.score()))
                })
                .collect();
            if self.state.sorting.is_empty() {
                ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            }
            ranked.into_iter().map(|(row, _)| row).collect()
        };

        if !self.state.sorting.is_empty() {
            rows.sort_by(|a, b| self.compare_rows(a, b));
        }

        let Pagination {
            page_index,
            page_size,
        } = self.state.pagination;
        let page_count = rows.len().div_ceil(page_size);
        let page_rows = rows
            .iter()
            .skip(page_index.saturating_mul(page_size))
            .take(page_size)
            .copied()
            .collect();

        RowModel {
            rows,
            page_rows,
            page_index,
            page_count,
        }
    }
}

// ============================================================================
// Column sets
// ============================================================================

/// Leaderboard columns; search covers trader name, address and handle
pub fn trader_columns() -> Vec<Column<Trader>> {
    vec![
        Column::new("rank", "Rank", |t: &Trader| CellValue::Number(t.rank.into())),
        Column::new("name", "Trader", |t: &Trader| {
            CellValue::Text(format!("{} {}", t.name, t.address))
        })
        .searchable()
        .unsortable(),
        Column::new("handle", "Followers", |t: &Trader| CellValue::Text(t.handle.clone()))
            .searchable(),
        Column::new("tokens", "Tokens", |t: &Trader| CellValue::Number(t.tokens.into())),
        Column::new("winRate", "Win Rate", |t: &Trader| {
            CellValue::Number(t.win_rate.into())
        }),
        Column::new("trades", "Trades", |t: &Trader| {
            CellValue::Text(format!("{} / {}", t.trades.won, t.trades.total))
        })
        .unsortable(),
        Column::new("avgBuy", "Avg Buy", |t: &Trader| CellValue::Number(t.avg_buy)),
        Column::new("avgEntry", "Avg Entry", |t: &Trader| CellValue::Number(t.avg_entry)),
        Column::new("avgHold", "Avg Hold", |t: &Trader| CellValue::Text(t.avg_hold.clone())),
        Column::new("realizedPNL", "Realized PNL", |t: &Trader| {
            CellValue::Number(t.realized_pnl)
        }),
    ]
}

/// Trade history columns; search covers token name and address
pub fn trade_columns() -> Vec<Column<Trade>> {
    vec![
        Column::new("name", "Token", |t: &Trade| {
            CellValue::Text(format!("{} {}", t.token.name, t.token.address))
        })
        .searchable(),
        Column::new("lastTrade", "Last trade", |t: &Trade| {
            CellValue::Text(t.last_trade.clone())
        }),
        Column::new("marketCap", "Market Cap", |t: &Trade| CellValue::Number(t.market_cap)),
        Column::new("invested", "Invested", |t: &Trade| CellValue::Number(t.invested)),
        Column::new("realizedPNL", "Realized PNL", |t: &Trade| {
            CellValue::Number(t.realized_pnl.value)
        }),
        Column::new("roi", "ROI", |t: &Trade| CellValue::Number(t.roi)),
        Column::new("trades", "Trades", |t: &Trade| {
            CellValue::Text(format!("{} / {}", t.trades.won, t.trades.total))
        })
        .unsortable(),
        Column::new("holding", "Holding", |t: &Trade| CellValue::Number(t.holding)),
        Column::new("avgBuy", "AVG Buy", |t: &Trade| CellValue::Number(t.avg_buy)),
        Column::new("avgSell", "AVG Sell", |t: &Trade| CellValue::Number(t.avg_sell)),
        Column::new("held", "Held", |t: &Trade| CellValue::Text(t.held.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures;

    fn traders() -> Vec<Trader> {
        vec![
            fixtures::trader(1, "Alice Whale", "0xaaa111", "@whale12"),
            fixtures::trader(2, "Bob", "0xbbb222", "@degen7"),
            fixtures::trader(3, "Carol", "0xccc333", "@sol99"),
            fixtures::trader(4, "Alfred", "0xddd444", "@alpha3"),
        ]
    }

    fn names<'a>(rows: &[&'a Trader]) -> Vec<&'a str> {
        rows.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_rank_item_levels() {
        assert_eq!(rank_item("Bob", "Bob"), Ranking::CaseSensitiveEqual);
        assert_eq!(rank_item("Bob", "bob"), Ranking::Equal);
        assert_eq!(rank_item("Alice Whale", "ali"), Ranking::StartsWith);
        assert_eq!(rank_item("Alice Whale", "wha"), Ranking::WordStartsWith);
        assert_eq!(rank_item("Alice Whale", "hal"), Ranking::Contains);
        assert_eq!(rank_item("Alice Whale", "aw"), Ranking::Acronym);
        assert_eq!(rank_item("market-cap tracker", "mct"), Ranking::Acronym);
        assert!(matches!(rank_item("Alice Whale", "acwe"), Ranking::Matches(_)));
        assert_eq!(rank_item("Alice Whale", "z"), Ranking::NoMatch);
        assert_eq!(rank_item("Bob", "bobby"), Ranking::NoMatch);
        assert_eq!(rank_item("Alice", "eca"), Ranking::NoMatch);
    }

    #[test]
    fn test_rank_item_ordering() {
        let levels = [
            rank_item("abc", "abc"),
            rank_item("abc", "ABC"),
            rank_item("abcdef", "abc"),
            rank_item("x abc", "abc"),
            rank_item("xabc", "abc"),
            rank_item("alpha beta gamma", "abg"),
            rank_item("a_b_c", "abc"),
            rank_item("xyz", "abc"),
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].score() > pair[1].score(), "{:?}", pair);
        }
    }

    #[test]
    fn test_tighter_subsequence_ranks_higher() {
        let tight = rank_item("xaxbx", "ab").score();
        let loose = rank_item("xaxxxxbx", "ab").score();
        assert!(tight > loose);
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("9 min", "45 min"), Ordering::Less);
        assert_eq!(natural_cmp("120 minutes", "45 minutes"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("abc", "abd"), Ordering::Less);
        assert_eq!(natural_cmp("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_empty_search_keeps_all_rows_in_order() {
        let data = traders();
        let mut table = Table::new(trader_columns());
        table.set_global_filter("   ");
        let model = table.row_model(&data);
        assert_eq!(names(&model.rows), vec!["Alice Whale", "Bob", "Carol", "Alfred"]);
    }

    #[test]
    fn test_search_drops_non_matching_and_orders_by_rank() {
        let data = traders();
        let mut table = Table::new(trader_columns());

        // Alice and Alfred start with "al"; Carol only matches as a subsequence
        table.set_global_filter("al");
        let model = table.row_model(&data);
        assert_eq!(names(&model.rows), vec!["Alice Whale", "Alfred", "Carol"]);

        // Handle column is searchable
        table.set_global_filter("@degen");
        let model = table.row_model(&data);
        assert_eq!(names(&model.rows), vec!["Bob"]);

        // Address is part of the name column
        table.set_global_filter("0xccc");
        let model = table.row_model(&data);
        assert_eq!(names(&model.rows), vec!["Carol"]);
    }

    #[test]
    fn test_rank_column_is_not_searchable() {
        let data = traders();
        let mut table = Table::new(trader_columns());
        table.set_global_filter("4");
        let model = table.row_model(&data);
        // Only rows whose name/address/handle contain "4" survive
        assert_eq!(names(&model.rows), vec!["Alfred"]);
    }

    #[test]
    fn test_sort_desc_and_stable() {
        let mut data = traders();
        data[0].tokens = 5;
        data[1].tokens = 9;
        data[2].tokens = 5;
        data[3].tokens = 9;

        let mut table = Table::new(trader_columns());
        table.set_sorting(vec![ColumnSort::desc("tokens")]);
        let model = table.row_model(&data);
        assert_eq!(names(&model.rows), vec!["Bob", "Alfred", "Alice Whale", "Carol"]);
    }

    #[test]
    fn test_multi_column_sort() {
        let mut data = traders();
        data[0].win_rate = 60;
        data[1].win_rate = 40;
        data[2].win_rate = 60;
        data[3].win_rate = 40;

        let mut table = Table::new(trader_columns());
        table.set_sorting(vec![ColumnSort::asc("winRate"), ColumnSort::desc("rank")]);
        let model = table.row_model(&data);
        assert_eq!(names(&model.rows), vec!["Alfred", "Bob", "Carol", "Alice Whale"]);
    }

    #[test]
    fn test_sort_duration_text_naturally() {
        let data = vec![
            fixtures::trade("A", "addr1", 120, 1.0),
            fixtures::trade("B", "addr2", 9, 1.0),
            fixtures::trade("C", "addr3", 45, 1.0),
        ];
        let mut table = Table::new(trade_columns());
        table.set_sorting(vec![ColumnSort::asc("held")]);
        let model = table.row_model(&data);
        let held: Vec<&str> = model.rows.iter().map(|t| t.held.as_str()).collect();
        assert_eq!(held, vec!["9 min", "45 min", "120 min"]);
    }

    #[test]
    fn test_unsortable_and_unknown_columns_ignored() {
        let mut table = Table::new(trader_columns());
        table.set_sorting(vec![
            ColumnSort::asc("name"),
            ColumnSort::asc("nope"),
            ColumnSort::asc("rank"),
        ]);
        assert_eq!(table.state().sorting, vec![ColumnSort::asc("rank")]);
    }

    #[test]
    fn test_toggle_sort_cycle() {
        let mut table = Table::new(trader_columns());
        table.toggle_sort("realizedPNL");
        assert_eq!(table.state().sorting, vec![ColumnSort::asc("realizedPNL")]);
        table.toggle_sort("realizedPNL");
        assert_eq!(table.state().sorting, vec![ColumnSort::desc("realizedPNL")]);
        table.toggle_sort("realizedPNL");
        assert!(table.state().sorting.is_empty());
    }

    #[test]
    fn test_pagination() {
        let data: Vec<Trader> = (1..=23)
            .map(|i| fixtures::trader(i, &format!("Trader {}", i), "0xabc", "@sol1"))
            .collect();
        let mut table = Table::new(trader_columns());

        let model = table.row_model(&data);
        assert_eq!(model.page_count, 3);
        assert_eq!(model.page_rows.len(), DEFAULT_PAGE_SIZE);
        assert!(!model.can_previous_page());
        assert!(model.can_next_page());

        table.next_page();
        table.next_page();
        let model = table.row_model(&data);
        assert_eq!(model.page_rows.len(), 3);
        assert_eq!(model.page_rows[0].rank, 21);
        assert!(!model.can_next_page());

        table.set_page_size(5);
        assert_eq!(table.state().pagination.page_index, 4);
        let model = table.row_model(&data);
        assert_eq!(model.page_rows[0].rank, 21);

        table.set_global_filter("Trader 1");
        assert_eq!(table.state().pagination.page_index, 0);

        table.previous_page();
        assert_eq!(table.state().pagination.page_index, 0);
    }

    #[test]
    fn test_empty_data_has_no_pages() {
        let table: Table<Trade> = Table::new(trade_columns());
        let model = table.row_model(&[]);
        assert_eq!(model.page_count, 0);
        assert!(model.page_rows.is_empty());
        assert!(!model.can_next_page());
    }
}
