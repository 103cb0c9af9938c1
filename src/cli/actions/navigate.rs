use crate::cli::commands::navigate::TokenSource;
use crate::router::{Decision, Navigation, Navigator, RouteTable};
use crate::session::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt::{self, Write as _},
};

#[derive(Debug)]
pub struct Args {
    pub table: RouteTable,
    pub path: String,
    pub from: Option<String>,
    pub token: TokenSource,
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a str,
    name: Option<&'a str>,
    component: &'a str,
    title: String,
    params: &'a BTreeMap<String, String>,
    redirects: &'a [Decision],
}

impl<'a> From<&'a Navigation<'a>> for Report<'a> {
    fn from(navigation: &'a Navigation<'a>) -> Self {
        Self {
            path: &navigation.route.path,
            name: navigation.route.route.name(),
            component: navigation.route.route.component.as_str(),
            title: navigation.title(),
            params: &navigation.route.params,
            redirects: &navigation.redirects,
        }
    }
}

fn token_store(source: &TokenSource) -> Box<dyn TokenStore> {
    match source {
        TokenSource::Absent => Box::new(MemoryTokenStore::default()),
        TokenSource::Inline(token) => {
            let mut store = MemoryTokenStore::default();
            store.insert(TOKEN_KEY, token.expose_secret());
            Box::new(store)
        }
        TokenSource::File(path) => Box::new(FileTokenStore::new(path)),
    }
}

/// Run the guard for `args.path` and print where the user ends up.
/// # Errors
/// Returns an error if the source or target path does not resolve, or a
/// redirect loop is detected.
pub fn execute(args: Args) -> Result<()> {
    let store = token_store(&args.token);
    let navigator = Navigator::new(args.table);

    let from = args
        .from
        .as_deref()
        .map(|path| navigator.table().resolve(path))
        .transpose()
        .context("Invalid --from path")?
        .map(|matched| matched.route);

    let navigation = navigator
        .navigate(&args.path, from, store.as_ref())
        .with_context(|| format!("Navigation to {} failed", args.path))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&Report::from(&navigation))?
        );
    } else {
        print!("{}", render(&navigation)?);
    }

    Ok(())
}

fn render(navigation: &Navigation<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for decision in &navigation.redirects {
        writeln!(out, "{decision}")?;
    }

    let route = navigation.route.route;
    writeln!(
        out,
        "-> {} ({}) {}",
        navigation.route.path,
        route.name().unwrap_or("-"),
        route.component
    )?;
    for (key, value) in &navigation.route.params {
        writeln!(out, "   {key} = {value}")?;
    }
    writeln!(out, "title: {}", navigation.title())?;
    Ok(out)
}
