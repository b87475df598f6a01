use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use localfmt_config::{Config, FormatterRegistry, Platform};
use localfmt_core::{
    FormattingOptions, Position, Range, RangeFormattingProvider, TextDocument, TextEdit,
};
use localfmt_lsp::{text_edits_to_value, to_lsp_text_edits};
use localfmt_runner::{ExternalFormatter, FormatContext, FormatError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() {
    env_logger::builder().format_timestamp(None).init();

    let cli = Cli::parse();
    let res = match cli.command {
        Action::Format(cmd) => format(cmd),
        Action::Diff(cmd) => diff(cmd),
    };

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(
    name = "localfmt",
    version,
    about = "Format with external formatters and emit minimal edits"
)]
struct Cli {
    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the configured formatter on a file
    Format(FormatCommand),

    /// Print the edits that turn one file into another
    Diff(DiffCommand),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// One line per edit: `range "new text"`
    Edits,
    /// LSP `TextEdit` array
    Json,
    /// The formatted text
    Print,
    /// Rewrite the file in place
    Write,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DiffOutput {
    Edits,
    Json,
}

#[derive(clap::Args)]
struct FormatCommand {
    /// File to format
    file: PathBuf,

    /// Formatter configuration (JSON)
    #[arg(long, env = "LOCALFMT_CONFIG")]
    config: PathBuf,

    /// Language id; defaults to the file extension
    #[arg(long)]
    language: Option<String>,

    /// Only keep edits touching `LINE:COL-LINE:COL` (zero-based)
    #[arg(long, value_parser = parse_range)]
    range: Option<Range>,

    #[arg(long, default_value_t = 4)]
    tab_size: u32,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    insert_spaces: bool,

    /// Workspace folder; may be repeated
    #[arg(long = "workspace")]
    workspaces: Vec<PathBuf>,

    /// Kill the formatter after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long, value_enum, default_value_t = Output::Edits)]
    output: Output,
}

#[derive(clap::Args)]
struct DiffCommand {
    before: PathBuf,
    after: PathBuf,

    /// Only keep edits touching `LINE:COL-LINE:COL` (zero-based)
    #[arg(long, value_parser = parse_range)]
    range: Option<Range>,

    #[arg(long, value_enum, default_value_t = DiffOutput::Edits)]
    output: DiffOutput,
}

fn format(cmd: FormatCommand) -> anyhow::Result<()> {
    let config = Config::load(&cmd.config)
        .with_context(|| format!("loading config {}", cmd.config.display()))?;
    let (registry, issues) = FormatterRegistry::from_config(&config, Platform::current());
    for issue in &issues {
        eprintln!("{issue}");
    }

    let language = match cmd.language {
        Some(language) => language,
        None => match cmd.file.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => ext.to_string(),
            None => bail!(
                "cannot infer a language for {}, pass --language",
                cmd.file.display()
            ),
        },
    };

    let text = read(&cmd.file)?;
    let document = TextDocument::new(text);

    let file_path = std::path::absolute(&cmd.file)?;
    let workspaces = cmd
        .workspaces
        .iter()
        .map(std::path::absolute)
        .collect::<Result<Vec<_>, _>>()?;
    let context = FormatContext::new(file_path).with_workspace_folders(workspaces);

    let formatter = ExternalFormatter::from_registry(&registry, &language, context)?
        .with_timeout(cmd.timeout_ms.map(Duration::from_millis));
    let options = FormattingOptions {
        tab_size: cmd.tab_size,
        insert_spaces: cmd.insert_spaces,
    };

    let result = match cmd.range {
        Some(range) => {
            let range = validate_range(&document, range);
            formatter.provide_range_formatting_edits(&document, range, &options)
        }
        None => formatter.provide_document_formatting_edits(&document, &options),
    };
    let edits = match result {
        Ok(edits) => edits,
        Err(err) => {
            if let FormatError::Failed { stderr, .. } = &err {
                eprint!("{stderr}");
            }
            return Err(err.into());
        }
    };

    match cmd.output {
        Output::Edits => print_edits(&edits)?,
        Output::Json => print_json(&document, &edits)?,
        Output::Print => print!("{}", document.apply_edits(&edits)?),
        Output::Write => {
            if edits.is_empty() {
                log::info!("{} is already formatted", cmd.file.display());
            } else {
                let formatted = document.apply_edits(&edits)?;
                fs::write(&cmd.file, formatted)
                    .with_context(|| format!("writing {}", cmd.file.display()))?;
            }
        }
    }
    Ok(())
}

fn diff(cmd: DiffCommand) -> anyhow::Result<()> {
    let before = TextDocument::new(read(&cmd.before)?);
    let after = read(&cmd.after)?;

    let edits = match cmd.range {
        Some(range) => before.diff_in_range(&after, validate_range(&before, range)),
        None => before.diff(&after),
    };

    match cmd.output {
        DiffOutput::Edits => print_edits(&edits),
        DiffOutput::Json => print_json(&before, &edits),
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn validate_range(document: &TextDocument, range: Range) -> Range {
    Range::new(
        document.validate_position(range.start),
        document.validate_position(range.end),
    )
}

fn print_edits(edits: &[TextEdit]) -> anyhow::Result<()> {
    for edit in edits {
        println!("{} {}", edit.range, serde_json::to_string(&edit.new_text)?);
    }
    Ok(())
}

fn print_json(document: &TextDocument, edits: &[TextEdit]) -> anyhow::Result<()> {
    let value = text_edits_to_value(&to_lsp_text_edits(document, edits));
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn parse_range(s: &str) -> Result<Range, String> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| format!("expected LINE:COL-LINE:COL, got '{s}'"))?;
    Ok(Range::new(parse_position(start)?, parse_position(end)?))
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (line, column) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{s}'"))?;
    let line = line
        .trim()
        .parse()
        .map_err(|err| format!("invalid line '{line}': {err}"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|err| format!("invalid column '{column}': {err}"))?;
    Ok(Position::new(line, column))
}
