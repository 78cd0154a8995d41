use clap::{Parser, ValueEnum};
use console::{Term, set_colors_enabled, style};
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::EnvFilter;

use couchmark::{Catalog, RankedResult, fmt, lookup_ntp_servers_n, lookup_servers_n, tui};

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "couchmark")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Benchmark public DNS and NTP servers from your couch")]
struct Args {
    /// Number of sweeps per server; results are averaged
    #[arg(short = 'c', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Probe NTP servers instead of DNS servers
    #[arg(short = 't', long)]
    ntp: bool,

    /// Probe the IPv6 DNS catalog (DNS only)
    #[arg(short = '6', long)]
    ipv6: bool,

    /// Also probe filtering/ECS resolver variants (DNS only)
    #[arg(long)]
    filtered: bool,

    /// Also probe Comcast resolvers; they only answer from inside
    /// the Comcast network (DNS only)
    #[arg(long)]
    comcast: bool,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Alias for JSON output
    #[arg(short = 'j', long)]
    json: bool,

    /// Pretty-print JSON
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Disable colored output
    #[arg(long = "no-color", alias = "nocolor")]
    no_color: bool,

    /// Browse results in an interactive table
    #[arg(long)]
    tui: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut args = Args::parse();

    // alias --json
    if args.json {
        args.format = OutputFormat::Json;
    }

    let term = Term::stdout();

    if args.ntp && (args.ipv6 || args.filtered || args.comcast) {
        term.write_line(
            &style("--ipv6, --filtered and --comcast only apply to DNS sweeps")
                .red()
                .to_string(),
        )
        .ok();
        process::exit(2);
    }
    if args.tui && matches!(args.format, OutputFormat::Json) {
        term.write_line(&style("--tui cannot be used with JSON output").red().to_string())
            .ok();
        process::exit(2);
    }

    let want_color = matches!(args.format, OutputFormat::Text)
        && io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && !args.no_color;
    set_colors_enabled(want_color);

    let results = if args.ntp {
        lookup_ntp_servers_n(args.count).await
    } else {
        lookup_servers_n(&dns_catalog(&args), args.count).await
    };

    // A failed run is reported but not fatal: render whatever we have.
    let results: Vec<RankedResult> = match results {
        Ok(r) => r,
        Err(e) => {
            term.write_line(&style(format!("Error: {}", e)).red().to_string())
                .ok();
            Vec::new()
        }
    };

    if args.tui {
        if let Err(e) = tui::run_tui(results) {
            eprintln!("Error running table view: {}", e);
            process::exit(1);
        }
        return;
    }

    match args.format {
        OutputFormat::Text => {
            let text = fmt::text::render_results(&results);
            term.write_str(&text).ok();
        }
        OutputFormat::Json => match fmt::json::to_json(&results, args.pretty) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serializing: {}", e),
        },
    }
}

fn dns_catalog(args: &Args) -> Catalog {
    let mut catalog = if args.ipv6 {
        Catalog::dns_v6()
    } else {
        Catalog::dns_v4()
    };
    if args.filtered {
        catalog = catalog.with_filtered();
    }
    if args.comcast {
        catalog = catalog.with_comcast();
    }
    catalog
}
