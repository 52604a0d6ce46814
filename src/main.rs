use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use curlparse::{CurlRequest, logger, parse, parse_strict};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Part {
    Url,
    Method,
    Headers,
    Data,
    Files,
    Auth,
    ContentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Pretty,
}

fn cli() -> Command {
    Command::new("curlparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns a curl command line into a structured HTTP request")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parses a curl command")
                .arg(
                    Arg::new("command")
                        .help("The input curl command string; read from stdin when omitted")
                        .required(false)
                        .index(1),
                )
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Print only one field of the request")
                        .required(false)
                        .value_parser(clap::value_parser!(Part)),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format")
                        .default_value("pretty")
                        .value_parser(clap::value_parser!(Format)),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on unterminated quotes, a missing url or a non-curl command")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn select(request: CurlRequest, part: Option<Part>) -> serde_json::Result<Value> {
    Ok(match part {
        None => serde_json::to_value(request)?,
        Some(Part::Url) => json!(request.url),
        Some(Part::Method) => json!(request.method),
        Some(Part::Headers) => serde_json::to_value(request.headers)?,
        Some(Part::Data) => json!(request.data),
        Some(Part::Files) => json!(request.files),
        Some(Part::Auth) => serde_json::to_value(request.basic_auth)?,
        Some(Part::ContentType) => json!(request.content_type),
    })
}

fn run(sub_matches: &clap::ArgMatches) -> Result<String, String> {
    let command = match sub_matches.get_one::<String>("command") {
        Some(command) => command.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Error reading stdin: {}", e))?;
            buf
        }
    };

    let request = if sub_matches.get_flag("strict") {
        parse_strict(&command).map_err(|e| format!("Error parsing curl command: {}", e))?
    } else {
        parse(&command)
    };

    let part = sub_matches.get_one::<Part>("part").copied();
    let value = select(request, part).map_err(|e| format!("Error encoding output: {}", e))?;
    let rendered = match sub_matches.get_one::<Format>("format") {
        Some(Format::Json) => serde_json::to_string(&value),
        _ => serde_json::to_string_pretty(&value),
    };
    rendered.map_err(|e| format!("Error encoding output: {}", e))
}

fn main() -> ExitCode {
    logger::init_logger();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("parse", sub_matches)) => match run(sub_matches) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{}", e);
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        },
        _ => {
            let _ = cli().print_help();
            println!();
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_select_part() {
        let request = parse("curl -u alice:pw -d @up.bin https://x.com");
        assert_eq!(select(request.clone(), Some(Part::Url)).unwrap(), json!("https://x.com"));
        assert_eq!(select(request.clone(), Some(Part::Files)).unwrap(), json!(["up.bin"]));
        assert_eq!(
            select(request.clone(), Some(Part::Auth)).unwrap(),
            json!({"user": "alice", "pass": "pw"})
        );
        assert_eq!(select(request, None).unwrap()["method"], json!("GET"));
    }

    #[test]
    fn test_parse_subcommand_arguments() {
        let matches = cli()
            .try_get_matches_from(["curlparse", "parse", "curl x.com", "-p", "content-type", "--strict"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "parse");
        assert_eq!(sub.get_one::<Part>("part"), Some(&Part::ContentType));
        assert!(sub.get_flag("strict"));
        assert_eq!(sub.get_one::<Format>("format"), Some(&Format::Pretty));
    }

    #[test]
    fn test_run_renders_single_field() {
        let matches = cli()
            .try_get_matches_from(["curlparse", "parse", "curl -XPUT x.com", "-p", "method", "-f", "json"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(run(sub).unwrap(), "\"PUT\"");
    }
}
