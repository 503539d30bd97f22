use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;

use ssconf::{Sip002Link, Sip008Document, UriFormat, UuidGenerator};

/// Convert Shadowsocks configurations between SIP002 URIs and SIP008 documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a ss:// URI and print it as a one-server SIP008 document
    Decode {
        uri: String,

        /// Read the legacy ss://BASE64(method:password@host:port)#tag form
        #[arg(long)]
        legacy_base64: bool,
    },

    /// Encode a client configuration file as a ss:// URI
    Encode {
        /// Path to the client JSON file
        #[arg(value_name = "FILE")]
        config: String,

        /// Display tag appended to the URI
        #[arg(short, long)]
        tag: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Auto)]
        format: Format,
    },

    /// Print one ss:// URI per server of a SIP008 document
    Links {
        /// Path to a SIP008 JSON file or an https:// URL
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        #[arg(short, long, value_enum, default_value_t = Format::Auto)]
        format: Format,
    },

    /// Combine ss:// URIs into one SIP008 document
    Bundle {
        #[arg(required = true)]
        uris: Vec<String>,

        /// Output file path, stdout if omitted
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Auto,
    Plain,
    Base64,
    Standard,
    LegacyBase64,
}

impl From<Format> for UriFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Auto => UriFormat::Auto,
            Format::Plain => UriFormat::PlainUserInfo,
            Format::Base64 => UriFormat::Base64UserInfo,
            Format::Standard => UriFormat::Standard,
            Format::LegacyBase64 => UriFormat::Base64,
        }
    }
}

fn load_document(source: &str) -> Result<Sip008Document> {
    if source.contains("://") {
        return Sip008Document::from_url(source)
            .with_context(|| format!("Failed to load SIP008 document from {}", source));
    }

    let content =
        fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))?;
    Sip008Document::from_json(&content).with_context(|| format!("Failed to parse {}", source))
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    match args.command {
        Command::Decode { uri, legacy_base64 } => {
            let decoded = if legacy_base64 {
                Sip002Link::from_base64_uri(&uri)
            } else {
                Sip002Link::from_uri(&uri)
            };
            let link = decoded.with_context(|| format!("Failed to decode {}", uri))?;

            println!("{}", Sip008Document::from_sip002(&link, &UuidGenerator).to_json());
        }
        Command::Encode {
            config,
            tag,
            format,
        } => {
            let mut link = Sip002Link::from_json_file(&config)
                .with_context(|| format!("Failed to load client configuration {}", config))?;
            if tag.is_some() {
                link.config.set_tag(tag);
            }

            println!("{}", link.to_uri_as(format.into()));
        }
        Command::Links { source, format } => {
            let doc = load_document(&source)?;
            info!("Loaded {} server(s) from {}", doc.len(), source);

            for link in doc.to_sip002_list() {
                println!("{}", link.to_uri_as(format.into()));
            }
        }
        Command::Bundle { uris, output } => {
            let links = uris
                .iter()
                .map(|uri| {
                    Sip002Link::from_uri(uri).with_context(|| format!("Failed to decode {}", uri))
                })
                .collect::<Result<Vec<_>>>()?;

            let json = Sip008Document::from_sip002_list(&links, &UuidGenerator).to_json();
            match output {
                Some(path) => {
                    fs::write(&path, json).with_context(|| format!("Failed to write {}", path))?;
                    info!("Successfully wrote {} server(s) to {}", links.len(), path);
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}
