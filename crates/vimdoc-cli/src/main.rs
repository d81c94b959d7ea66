use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use vimdoc_core::{builtin_tags, render_html, render_html_sanitized, tokenize};

fn main() {
    env_logger::init();

    let mut input: Option<String> = None;
    let mut sanitized = false;
    let mut standalone = false;
    let mut use_builtin = true;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--standalone" => standalone = true,
            "--no-builtin" => use_builtin = false,
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let tokens = tokenize(&source);
    log::debug!("{} tokens from {} input bytes", tokens.len(), source.len());

    let empty = HashMap::new();
    let builtin = if use_builtin { builtin_tags() } else { &empty };

    let html = if sanitized {
        render_html_sanitized(&tokens, builtin)
    } else {
        render_html(&tokens, builtin)
    };

    if standalone {
        print!("{}", standalone_page(&html));
    } else {
        print!("{}", html);
    }
}

fn print_usage() {
    eprintln!("Usage: vimdoc-cli [--sanitized] [--standalone] [--no-builtin] [input]");
}

// Minimal page wrapper. Help text is whitespace-significant, so the
// fragment lives inside a <pre>.
fn standalone_page(html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>vimdoc</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<pre class=\"vimdoc\">{html}</pre>\n</body>\n</html>\n"
    )
}

const STYLE: &str = "\
pre.vimdoc { font-family: monospace; color: #202020; background: #f6f6f6; padding: 1em; }
.header { color: #af5f00; font-weight: bold; }
.section_separator { color: #af5f00; }
.subheader { color: #870087; font-weight: bold; }
.subheader_marker { color: #bcbcbc; }
.special_key { color: #005f87; }
.special_term { color: #005f5f; }
.optional_term { color: #005f5f; }
.option { color: #5f8700; }
.tag_anchor a { color: #870087; text-decoration: none; }
.tag_anchor { color: #bcbcbc; }
.tag_link a { color: #005fd7; }
.tag_link { color: #bcbcbc; }
.example { color: #444444; background: #eeeeee; display: inline; }
.example_marker { color: #bcbcbc; }
a.uri { color: #005fd7; }
a.vimscript_link { color: #005fd7; }
";
