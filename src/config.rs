use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{App, Arg, ArgMatches};
use simple_error::SimpleError;

use crate::error::*;
use crate::types::*;

///Runtime configuration of the service
#[derive(Clone,Debug,PartialEq)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    ///Word list to seed the index with at startup, if any
    pub wordlist: Option<PathBuf>,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            port: DEFAULT_PORT,
            wordlist: None,
            debug: false,
        }
    }
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    ///Builds a configuration from parsed command line arguments
    pub fn from_matches(args: &ArgMatches) -> Result<Config> {
        let mut config = Config::default();
        if let Some(port) = args.value_of("port") {
            config.port = port.parse::<u16>().map_err(|e| {
                SimpleError::new(format!("port should be an integer between 0 and 65535, got {}: {}", port, e))
            })?;
        }
        if let Some(bind) = args.value_of("bind") {
            config.bind = bind.parse::<IpAddr>().map_err(|e| {
                SimpleError::new(format!("bind address should be an IP address, got {}: {}", bind, e))
            })?;
        }
        if let Some(wordlist) = args.value_of("wordlist") {
            config.wordlist = Some(PathBuf::from(wordlist));
        }
        config.debug = args.is_present("debug");
        Ok(config)
    }
}

fn port_help() -> &'static str {
    static HELP: OnceLock<String> = OnceLock::new();
    HELP.get_or_init(|| format!("Port to serve HTTP on [default: {}]", DEFAULT_PORT))
}

fn bind_help() -> &'static str {
    static HELP: OnceLock<String> = OnceLock::new();
    HELP.get_or_init(|| format!("Address to bind to [default: {}]", DEFAULT_BIND))
}

pub fn common_arguments<'a,'b>() -> Vec<Arg<'a,'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("port")
        .long("port")
        .short("p")
        .help(port_help())
        .takes_value(true));
    args.push(Arg::with_name("bind")
        .long("bind")
        .short("b")
        .help(bind_help())
        .takes_value(true));
    args.push(Arg::with_name("wordlist")
        .long("wordlist")
        .short("w")
        .help("Word list to seed the index with at startup, one word per line. Without it the index starts empty.")
        .takes_value(true)
        .required(false));
    args.push(Arg::with_name("debug")
        .long("debug")
        .short("D")
        .help("Debug logging")
        .required(false));
    args
}

pub fn app<'a,'b>() -> App<'a,'b> {
    App::new("anagramsearch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Anagram search service: find the anagrams of a word in an in-memory word index over HTTP")
        .args(&common_arguments())
}
