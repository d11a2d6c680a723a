use anyhow::{Context, Result, bail};
use freenachos_config::{Config, OutputFormat};
use freenachos_engine::{
    ArticleDraft, ContentBlock, ImportOptions, PasteFormat,
    inline::{render_html, to_plain_text},
};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str =
    "Usage: freenachos-import [--html | --text] [--format json|blocks|summary|html] [--no-title] [FILE]";

/// Characters of block text shown per line in summary output.
const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Default, PartialEq)]
struct Args {
    format: Option<PasteFormat>,
    output: Option<OutputFormat>,
    no_title: bool,
    input: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--html" => parsed.format = Some(PasteFormat::Html),
            "--text" => parsed.format = Some(PasteFormat::PlainText),
            "--no-title" => parsed.no_title = true,
            "--format" => {
                let name = iter.next().context("--format needs a value")?;
                let output = OutputFormat::from_name(name)
                    .with_context(|| format!("Unknown output format '{name}'"))?;
                parsed.output = Some(output);
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{flag}'"),
            path => {
                if parsed.input.is_some() {
                    bail!("Only one input file may be given");
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read paste from '{}'", path.display())),
        None => {
            let mut paste = String::new();
            io::stdin()
                .read_to_string(&mut paste)
                .context("Failed to read paste from stdin")?;
            Ok(paste)
        }
    }
}

fn import(
    paste: &str,
    format: Option<PasteFormat>,
    options: &ImportOptions,
) -> Result<ArticleDraft> {
    let mut draft = ArticleDraft::new();
    let format = format.unwrap_or_else(|| PasteFormat::detect(paste));
    let summary = draft.import_paste_as(paste, format, options)?;
    if let Some(title) = &summary.title {
        log::info!("Extracted title '{title}'");
    }
    Ok(draft)
}

fn summary_line(index: usize, block: &ContentBlock) -> String {
    let text = match block {
        ContentBlock::List { items } => items
            .iter()
            .map(String::as_str)
            .map(to_plain_text)
            .collect::<Vec<_>>()
            .join(" | "),
        ContentBlock::Code { content, .. } => {
            content.lines().next().unwrap_or_default().to_string()
        }
        ContentBlock::Image { src, alt, .. } => {
            if src.is_empty() {
                alt.clone()
            } else {
                src.clone()
            }
        }
        other => to_plain_text(other.inline_content().unwrap_or_default()),
    };
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    format!("{index:>3} {:<9} {preview}", block.kind().as_str())
}

fn html_preview(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Header { level, content } => {
            format!("<h{level}>{}</h{level}>", render_html(content))
        }
        ContentBlock::Paragraph { content } => format!("<p>{}</p>", render_html(content)),
        ContentBlock::Callout { title, content, .. } => format!(
            "<aside><strong>{}</strong> {}</aside>",
            render_html(title),
            render_html(content)
        ),
        ContentBlock::List { items } => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_html(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        ContentBlock::Quote { content, .. } => {
            format!("<blockquote>{}</blockquote>", render_html(content))
        }
        ContentBlock::Code { .. } | ContentBlock::Image { .. } => {
            format!("<!-- {} -->", block.kind().as_str())
        }
    }
}

fn render(draft: &ArticleDraft, output: OutputFormat) -> Result<String> {
    let rendered = match output {
        OutputFormat::Json => serde_json::to_string_pretty(draft)?,
        OutputFormat::Blocks => serde_json::to_string_pretty(&draft.blocks)?,
        OutputFormat::Summary => {
            let mut lines = vec![];
            if !draft.title.is_empty() {
                lines.push(format!("title: {} ({})", draft.title, draft.slug_or_generated()));
            }
            lines.extend(
                draft
                    .blocks
                    .iter()
                    .enumerate()
                    .map(|(i, block)| summary_line(i, block)),
            );
            lines.join("\n")
        }
        OutputFormat::Html => draft
            .blocks
            .iter()
            .map(html_preview)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}

fn run(args: Args, config: Config) -> Result<()> {
    let input = args.input.or(config.default_input);
    let paste = read_input(input.as_ref())?;

    let options = ImportOptions {
        extract_title: config.extract_title && !args.no_title,
        excerpt_chars: config.excerpt_chars,
    };
    let draft = import(&paste, args.format, &options)?;
    log::info!("Imported {} blocks", draft.blocks.len());

    println!("{}", render(&draft, args.output.unwrap_or(config.output))?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    log::debug!("Config path: {}", config_path.display());
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(args, config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
