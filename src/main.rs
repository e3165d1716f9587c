use anyhow::Context;
use clap::{Parser, Subcommand};

mod build;
mod canon;
mod map;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "dns-aliases")]
#[command(about = "BOSH-DNS alias record renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render aliases.json from an alias document (validates inputs while running).
    Render {
        /// JSON document with the "aliases" list.
        #[arg(long)]
        aliases: String,

        /// Fallback domain for targets that do not name one
        /// (the instance spec's dns_domain_name).
        #[arg(long)]
        default_domain: String,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            aliases,
            default_domain,
            out,
        } => {
            // 1) Parse the alias document.
            let text = std::fs::read_to_string(&aliases)
                .with_context(|| format!("read alias document {}", aliases))?;
            let doc: spec::AliasesSpec = serde_json::from_str(&text)
                .with_context(|| format!("parse alias document {}", aliases))?;

            // 2) Validate + assemble grouped query strings.
            let rendered = build::build(&doc.aliases, &default_domain)?;

            // 3) Write the mapping for the nameserver job.
            let json = serde_json::to_string_pretty(&rendered)?;
            std::fs::write(&out, json).with_context(|| format!("write {}", out))?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
