//! nodeinfo CLI Client
//!
//! Command-line interface for querying node info.

use std::collections::{BTreeMap, HashMap};

use clap::Parser;
use nodeinfo::{Config, Node, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// nodeinfo CLI
#[derive(Parser, Debug)]
#[command(name = "nodeinfo-cli")]
#[command(about = "Query database nodes over the info protocol")]
#[command(version)]
struct Args {
    /// Node address (host:port); repeat to query several nodes at once
    #[arg(short, long = "server", default_value = "127.0.0.1:3000")]
    servers: Vec<String>,

    /// Connect/read/write timeout in milliseconds (0 = no timeout)
    #[arg(short, long, default_value = "2000")]
    timeout_ms: u64,

    /// Print flattened node statistics instead of raw info values
    #[arg(long)]
    stats: bool,

    /// Info names to request (none = everything)
    names: Vec<String>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,nodeinfo=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder().timeout_ms(args.timeout_ms).build();
    let nodes: Vec<Node> = args
        .servers
        .iter()
        .map(|addr| Node::new(addr.as_str(), config.clone()))
        .collect();

    let names = &args.names;
    let stats = args.stats;

    // One thread and one connection per node
    let outcome = crossbeam::scope(|scope| {
        let handles: Vec<_> = nodes
            .iter()
            .map(|node| scope.spawn(move |_| query(node, names, stats)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    });

    let results = match outcome {
        Ok(results) => results,
        Err(_) => {
            tracing::error!("Query threads panicked");
            std::process::exit(1);
        }
    };

    let prefix = nodes.len() > 1;
    let mut failed = false;

    for (node, result) in nodes.iter().zip(results) {
        match result {
            Ok(Ok(entries)) => {
                for (name, value) in entries {
                    if prefix {
                        println!("{}\t{}\t{}", node.addr(), name, value);
                    } else {
                        println!("{}\t{}", name, value);
                    }
                }
            }
            Ok(Err(e)) => {
                tracing::error!("{}: {}", node.addr(), e);
                failed = true;
            }
            Err(_) => {
                tracing::error!("{}: query thread panicked", node.addr());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Run one query and return its entries sorted by name
fn query(node: &Node, names: &[String], stats: bool) -> Result<BTreeMap<String, String>> {
    let entries: HashMap<String, String> = if stats {
        node.statistics()?
    } else {
        node.info(names)?
    };

    Ok(entries.into_iter().collect())
}
