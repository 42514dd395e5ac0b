//! Startup banner and URL display

use super::config::{AppConfig, is_all_interfaces};
use super::constants::APP_NAME;

/// Print the startup banner with URLs
pub fn print_banner(config: &AppConfig) {
    let host = config.server.host.as_str();
    let port = config.server.port;

    // Use localhost for display when binding to all interfaces
    let display_host = if is_all_interfaces(host) {
        "localhost"
    } else {
        host
    };

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();

    // Label width: "Leaderboard:" is 12 chars, pad to 14 for alignment
    const W: usize = 14;

    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}/api/traders",
        "Leaderboard:", display_host, port
    );
    println!(
        "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}/api/docs",
        "API docs:", display_host, port
    );

    if host == "127.0.0.1" || host == "localhost" {
        println!(
            "  \x1b[90m➜  {:<W$} use --host 0.0.0.0 to expose\x1b[0m",
            "Network:"
        );
    } else if is_all_interfaces(host) {
        if let Ok(interfaces) = local_ip_address::list_afinet_netifas() {
            for (_, ip) in interfaces
                .iter()
                .filter(|(_, ip)| ip.is_ipv4() && !ip.is_loopback())
            {
                println!(
                    "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}",
                    "Network:", ip, port
                );
            }
        }
    } else {
        println!(
            "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}",
            "Network:", host, port
        );
    }

    let mock = &config.mock;
    let data = match mock.seed {
        Some(seed) => format!(
            "{} traders, {} trades, seed {}",
            mock.traders_count, mock.trades_count, seed
        ),
        None => format!(
            "{} traders, {} trades, random",
            mock.traders_count, mock.trades_count
        ),
    };
    println!("  \x1b[90m➜  {:<W$} {}\x1b[0m", "Mock data:", data);

    let delay = &mock.delay;
    if delay.traders_ms + delay.profile_ms + delay.trades_ms > 0 {
        println!(
            "  \x1b[90m➜  {:<W$} traders {}ms, profile {}ms, trades {}ms\x1b[0m",
            "Latency:", delay.traders_ms, delay.profile_ms, delay.trades_ms
        );
    }

    println!();
}
