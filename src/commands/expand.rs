use anyhow::Result;
use errkit::{BoxError, Error, List, Op};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::ExpandArgs;
use crate::kind::ErrorKind;

pub fn run(args: &ExpandArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let output = expand(&input, &args.vars, args.strict, |name| std::env::var(name).ok())?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .and_then(|()| stdout.flush())
        .map_err(|e| Error::wrap(ErrorKind::Io, "cannot write output", Op("expand.write"), e))?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> errkit::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).map_err(|e| {
            Error::wrap(
                ErrorKind::Io,
                format!("cannot read {}", path.display()),
                Op("expand.read"),
                e,
            )
        }),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| Error::wrap(ErrorKind::Io, "cannot read stdin", Op("expand.read"), e))?;
            Ok(buf)
        }
    }
}

/// Expand `${NAME}` in `input`. Names are resolved from `vars` first, then
/// from `lookup`. Unresolved names expand to nothing, or fail the whole
/// expansion in strict mode.
fn expand<F>(
    input: &[u8],
    vars: &[(String, String)],
    strict: bool,
    lookup: F,
) -> errkit::Result<Vec<u8>>
where
    F: Fn(&str) -> Option<String>,
{
    let overrides: HashMap<&str, &str> = vars
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let mut missing: Vec<String> = Vec::new();

    let expanded = textkit::expand_variables(input, |name| {
        if let Some(value) = overrides.get(name) {
            return (*value).to_string();
        }
        if let Some(value) = lookup(name) {
            return value;
        }
        if !missing.iter().any(|m| m == name) {
            missing.push(name.to_string());
        }
        String::new()
    });

    if missing.is_empty() {
        return Ok(expanded.into_owned());
    }
    if !strict {
        for name in &missing {
            log::warn!("Variable '{name}' is not set, expanding to an empty string");
        }
        return Ok(expanded.into_owned());
    }

    let undefined: List = missing
        .into_iter()
        .map(|name| {
            BoxError::from(Error::new(
                ErrorKind::Invalid,
                format!("undefined variable: {name}"),
                Op("expand.lookup"),
            ))
        })
        .collect();
    Err(Error::annotate(
        "template references undefined variables",
        Op("expand.run"),
        Error::wrap(
            ErrorKind::Invalid,
            format!("{} unresolved placeholder(s)", undefined.len()),
            Op("expand.resolve"),
            undefined,
        ),
    ))
}
