//! Subcommand implementations.
//!
//! Each handler writes its normal output to `out` so it can be captured in
//! tests; diagnostics go through `log`.

use super::{Cli, Commands};
use crate::session::Session;
use anyhow::{Context, Result, anyhow, bail};
use ib_tweaker_config::{Config, PatternSet};
use ib_tweaker_fonts::{FontCatalog, FontSelection};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for `set-font`, gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct SetFontOptions {
    pub name: String,
    pub size: Option<f32>,
    pub filters: Vec<String>,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub skip_font_check: bool,
    pub allow_empty: bool,
}

/// Dispatch a parsed command line.
///
/// The config file is only read by commands that use it, so `init-config`
/// works even when the existing file is broken.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let Cli {
        command,
        config: config_path,
        ..
    } = cli;
    let load = || -> Result<Config> {
        let config = load_config(config_path.as_deref())?;
        crate::debug::apply_config_level(config.log_level.to_level_filter());
        Ok(config)
    };

    match command {
        Commands::Show { file, filters } => show(&load()?, &file, &filters, out),
        Commands::SetFont {
            file,
            name,
            size,
            filters,
            output,
            dry_run,
            skip_font_check,
            allow_empty,
        } => {
            let options = SetFontOptions {
                name,
                size,
                filters,
                output,
                dry_run,
                skip_font_check,
                allow_empty,
            };
            set_font(&load()?, &file, &options, out)
        }
        Commands::Filters => list_filters(&load()?.pattern_set(), out),
        Commands::Fonts { search } => {
            let catalog = FontCatalog::load_system(load()?.hide_dot_fonts);
            list_fonts(&catalog, search.as_deref(), out)
        }
        Commands::InitConfig { force } => {
            let path = config_path.clone().unwrap_or_else(Config::config_path);
            init_config(&path, force, out)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Config::load(),
    }
}

/// Print `file`, reduced to the matches of `filters` when any are given.
pub fn show(config: &Config, file: &Path, filters: &[String], out: &mut dyn Write) -> Result<()> {
    let mut session = Session::from_config(config);
    session.open(file)?;
    select_filters(&mut session, filters)?;
    write!(out, "{}", session.display())?;
    Ok(())
}

/// Replace the first font declaration in `file` and save the result.
pub fn set_font(
    config: &Config,
    file: &Path,
    options: &SetFontOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let size = options.size.unwrap_or(config.default_font_size);
    let selection = if options.skip_font_check {
        FontSelection::new(options.name.as_str(), size)?
    } else {
        let catalog = FontCatalog::load_system(config.hide_dot_fonts);
        FontSelection::resolve(&options.name, size, &catalog)?
    };

    let mut session = Session::from_config(config);
    session.open(file)?;
    select_filters(&mut session, &options.filters)?;

    let result = session.apply_font(&config.font_tag_pattern, &selection)?;
    writeln!(out, "replaced: {}", result.matched_text)?;
    writeln!(out, "with:     {}", result.replacement_text)?;

    if options.dry_run {
        write!(out, "{}", session.display())?;
        return Ok(());
    }

    match &options.output {
        Some(output) => {
            session.save_as(output, options.allow_empty)?;
            writeln!(out, "saved:    {}", output.display())?;
        }
        None => {
            let saved = session.save(options.allow_empty)?;
            writeln!(out, "saved:    {}", saved.display())?;
        }
    }

    if session.engine().selected_indices().next().is_some() {
        write!(out, "{}", session.display())?;
    }
    Ok(())
}

/// Print the filter catalog as `index<TAB>label<TAB>pattern` lines.
pub fn list_filters(patterns: &PatternSet, out: &mut dyn Write) -> Result<()> {
    for definition in patterns.definitions() {
        writeln!(
            out,
            "{}\t{}\t{}",
            definition.index, definition.label, definition.pattern
        )?;
    }
    Ok(())
}

/// Print font names, one per line.
pub fn list_fonts(catalog: &FontCatalog, search: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let names: Vec<&str> = match search {
        Some(needle) => catalog.search(needle),
        None => catalog.names().collect(),
    };
    if names.is_empty() {
        log::warn!("No fonts found");
    }
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Write the default config to `path`.
pub fn init_config(path: &Path, force: bool, out: &mut dyn Write) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)?;
    writeln!(out, "wrote default config to {}", path.display())?;
    Ok(())
}

/// Select each filter named by label or index.
fn select_filters(session: &mut Session, filters: &[String]) -> Result<()> {
    for filter in filters {
        let index = resolve_filter(session.engine().patterns(), filter)?;
        session.engine_mut().select_filter(index)?;
    }
    Ok(())
}

/// Find a filter by numeric index or case-insensitive label.
pub fn resolve_filter(patterns: &PatternSet, filter: &str) -> Result<usize> {
    if let Ok(index) = filter.trim().parse::<usize>() {
        return Ok(patterns.definition(index)?.index);
    }
    patterns
        .find_by_label(filter.trim())
        .map(|d| d.index)
        .ok_or_else(|| {
            let labels: Vec<&str> = patterns
                .definitions()
                .iter()
                .map(|d| d.label.as_str())
                .collect();
            anyhow!(
                "unknown filter '{}' (available: {})",
                filter,
                labels.join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ib_tweaker_config::FilterRule;

    fn patterns() -> PatternSet {
        PatternSet::from_rules(&[
            FilterRule::new("FONTS", "<font"),
            FilterRule::new("Colors", "<color"),
        ])
    }

    #[test]
    fn test_resolve_filter_by_label_and_index() {
        let patterns = patterns();
        assert_eq!(resolve_filter(&patterns, "fonts").unwrap(), 0);
        assert_eq!(resolve_filter(&patterns, "COLORS").unwrap(), 1);
        assert_eq!(resolve_filter(&patterns, "1").unwrap(), 1);
    }

    #[test]
    fn test_resolve_filter_errors() {
        let patterns = patterns();
        let unknown = resolve_filter(&patterns, "images").unwrap_err();
        assert_eq!(
            unknown.to_string(),
            "unknown filter 'images' (available: FONTS, Colors)"
        );
        assert!(resolve_filter(&patterns, "7").is_err());
    }

    #[test]
    fn test_list_filters_output() {
        let mut out = Vec::new();
        list_filters(&patterns(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\tFONTS\t<font\n1\tColors\t<color\n"
        );
    }

    #[test]
    fn test_list_fonts_with_search() {
        let catalog = FontCatalog::from_names(["Helvetica", "Menlo", ".Hidden"], true);
        let mut out = Vec::new();
        list_fonts(&catalog, Some("men"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Menlo\n");

        let mut out = Vec::new();
        list_fonts(&catalog, None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Helvetica\nMenlo\n");
    }
}
