// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

//! Skein CLI entrypoint.
//!
//! Fetches one campaign's mind map over the REST API and writes an SVG
//! snapshot to stdout (or `--out`). `--demo` renders a built-in fixture map
//! without touching the network.

use std::error::Error;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use skein::model::{fixtures, CampaignId};
use skein::remote::{MindmapApi, MindmapApiConfig};
use skein::render::{derive_scene, render_svg, SvgOptions};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --base-url <url> --campaign <id> [--out <file>] [--timeout-secs <n>]\n  {program} --demo [--out <file>]\n\nFetches the campaign's mind map and writes an SVG snapshot to stdout,\nor to <file> with --out.\n\n--demo renders a built-in demo map and cannot be combined with\n--base-url/--campaign/--timeout-secs."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    base_url: Option<String>,
    campaign: Option<String>,
    out: Option<String>,
    timeout_secs: Option<u64>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--base-url" => {
                if options.base_url.is_some() {
                    return Err(());
                }
                options.base_url = Some(args.next().ok_or(())?);
            }
            "--campaign" => {
                if options.campaign.is_some() {
                    return Err(());
                }
                options.campaign = Some(args.next().ok_or(())?);
            }
            "--out" => {
                if options.out.is_some() {
                    return Err(());
                }
                options.out = Some(args.next().ok_or(())?);
            }
            "--timeout-secs" => {
                if options.timeout_secs.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let secs: u64 = raw.parse().map_err(|_| ())?;
                options.timeout_secs = Some(secs);
            }
            _ => return Err(()),
        }
    }

    if options.demo {
        if options.base_url.is_some() || options.campaign.is_some() || options.timeout_secs.is_some()
        {
            return Err(());
        }
    } else if options.base_url.is_none() || options.campaign.is_none() {
        return Err(());
    }

    Ok(options)
}

fn write_output(svg: &str, out: Option<&str>) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => std::fs::write(path, svg)?,
        None => print!("{svg}"),
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();

        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "skein".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.demo {
            let map = fixtures::demo_mindmap();
            let svg = render_svg(&derive_scene(&map), &SvgOptions::default());
            return write_output(&svg, options.out.as_deref());
        }

        let base_url = options.base_url.unwrap_or_default();
        let campaign = CampaignId::new(options.campaign.unwrap_or_default())?;

        let mut config = MindmapApiConfig::new(base_url);
        if let Some(secs) = options.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        let api = MindmapApi::new(config, campaign)?;

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let map = runtime.block_on(api.fetch_mindmap())?;

        let svg = render_svg(&derive_scene(&map), &SvgOptions::default());
        write_output(&svg, options.out.as_deref())
    })();

    if let Err(err) = result {
        eprintln!("skein: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|value| (*value).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(args(&["--demo"])).expect("parse options");
        assert!(options.demo);
        assert_eq!(options.out, None);
    }

    #[test]
    fn parses_fetch_options() {
        let options = parse_options(args(&[
            "--base-url",
            "http://localhost:4000",
            "--campaign",
            "c-7",
            "--out",
            "map.svg",
            "--timeout-secs",
            "5",
        ]))
        .expect("parse options");

        assert_eq!(
            options,
            CliOptions {
                demo: false,
                base_url: Some("http://localhost:4000".to_owned()),
                campaign: Some("c-7".to_owned()),
                out: Some("map.svg".to_owned()),
                timeout_secs: Some(5),
            }
        );
    }

    #[test]
    fn rejects_empty_args() {
        parse_options(std::iter::empty()).unwrap_err();
    }

    #[test]
    fn rejects_missing_campaign() {
        parse_options(args(&["--base-url", "http://localhost:4000"])).unwrap_err();
    }

    #[test]
    fn rejects_demo_with_fetch_options() {
        parse_options(args(&["--demo", "--base-url", "http://localhost:4000"])).unwrap_err();
        parse_options(args(&["--demo", "--campaign", "c-7"])).unwrap_err();
        parse_options(args(&["--demo", "--timeout-secs", "5"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(args(&["--demo", "--demo"])).unwrap_err();
        parse_options(args(&[
            "--base-url", "a", "--base-url", "b", "--campaign", "c-7",
        ]))
        .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_flag_value() {
        parse_options(args(&["--base-url"])).unwrap_err();
    }
}
