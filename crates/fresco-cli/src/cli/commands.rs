use super::CliError;
use super::helpers::*;
use fresco_core::categorize::Bucket;
use fresco_core::domain::FrescoError;
use fresco_core::potential::{self, SlotSyntax, catalog};
use fresco_core::registry::ParameterRegistry;
use fresco_core::session::{SessionConfig, load_session_config};
use fresco_core::{FrescoSession, InputProfile, ReactionType, SessionOptions};
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

#[derive(clap::Args)]
pub(super) struct ParseArgs {
    /// FRESCO or CDCC input file
    file: PathBuf,

    /// Print blocks as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct GenerateArgs {
    /// JSON session config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Existing input file to load before applying the config
    #[arg(long)]
    input: Option<PathBuf>,

    /// Parameter override as name=value, applied last
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,

    /// Reaction type used for default potentials
    #[arg(long)]
    reaction: Option<String>,

    /// Write potential slots as p(1:6)=..
    #[arg(long)]
    array_syntax: bool,

    /// Input profile: fresco or cdcc
    #[arg(long)]
    profile: Option<String>,

    /// Output path; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ParamsArgs {
    /// Only list one category id
    #[arg(long)]
    category: Option<String>,

    /// Print definitions as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct PotentialsArgs {
    /// Reaction type: elastic, inelastic, transfer or capture
    #[arg(default_value = "elastic")]
    reaction: String,

    /// Write potential slots as p(1:6)=..
    #[arg(long)]
    array_syntax: bool,
}

#[derive(clap::Args)]
pub(super) struct CategorizeArgs {
    /// Input file whose parameters move to the general section
    #[arg(long)]
    input: Option<PathBuf>,

    /// Input profile: fresco or cdcc
    #[arg(long, default_value = "fresco")]
    profile: String,

    /// Move request as name:general or name:advanced
    #[arg(long = "move", value_name = "NAME:BUCKET")]
    moves: Vec<String>,

    /// Restore the default split before applying moves
    #[arg(long)]
    reset: bool,

    /// Print the split as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct ShapesArgs {
    /// Potential TYPE code
    #[arg(allow_negative_numbers = true)]
    type_code: i32,
}

pub(super) fn run_parse_command(args: ParseArgs) -> Result<i32, CliError> {
    let text = read_text(&args.file)?;
    let parsed = fresco_core::parse(&text);
    let document = &parsed.document;

    if args.json {
        print_json(&json!({
            "header": document.header,
            "profile": document.profile,
            "namelists": document.to_map(),
            "skipped": parsed.report.skipped,
        }))?;
        return Ok(0);
    }

    if let Some(header) = &document.header {
        println!("header: {header}");
    }
    if let Some(profile) = document.profile {
        println!("profile: {profile}");
    }
    for block in &document.blocks {
        println!("&{} ({} values)", block.key.to_ascii_uppercase(), block.len());
        for (name, value) in &block.entries {
            println!("  {name} = {value}");
        }
    }
    for skipped in &parsed.report.skipped {
        println!("skipped line {}: {}", skipped.line, skipped.text);
    }
    Ok(0)
}

pub(super) fn run_generate_command(args: GenerateArgs) -> Result<i32, CliError> {
    let config = match &args.config {
        Some(path) => load_session_config(path).map_err(config_error)?,
        None => SessionConfig::default(),
    };

    let mut options = SessionOptions::from(&config);
    if let Some(reaction) = &args.reaction {
        options.reaction = reaction.parse().map_err(CliError::Compute)?;
    }
    if let Some(profile) = &args.profile {
        options.profile = profile.parse().map_err(CliError::Compute)?;
    }
    debug!(
        reaction = %options.reaction,
        profile = %options.profile,
        overrides = args.overrides.len(),
        "resolved session options"
    );
    let mut session = FrescoSession::new(options);

    if let Some(input) = &args.input {
        let summary = session.load_input(&read_text(input)?);
        eprintln!("{}", summary.message);
        for warning in &summary.warnings {
            eprintln!("warning: {warning}");
        }
    }
    session.apply_config(&config).map_err(CliError::Compute)?;

    for raw in &args.overrides {
        let (name, value) = parse_assignment(raw)?;
        if let Some(warning) = session.set_value(name, value).map_err(CliError::Compute)? {
            eprintln!("warning: {warning}");
        }
    }
    if args.array_syntax {
        session.set_slot_syntax(Some(SlotSyntax::Array));
    }

    let deck = session.generate_input();
    match &args.output {
        Some(path) => {
            write_text(path, &deck)?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{deck}"),
    }
    Ok(0)
}

pub(super) fn run_params_command(args: ParamsArgs) -> Result<i32, CliError> {
    let registry = ParameterRegistry::standard();
    let categories = match &args.category {
        Some(id) => {
            let category = registry.category(id).ok_or_else(|| {
                CliError::Compute(FrescoError::input_validation(
                    "INPUT.CATEGORY",
                    format!("unknown parameter category '{id}'"),
                ))
            })?;
            std::slice::from_ref(category)
        }
        None => registry.categories(),
    };

    if args.json {
        print_json(&categories)?;
        return Ok(0);
    }

    for category in categories {
        println!("{} ({})", category.title, category.id);
        for definition in category.parameters {
            let default = definition
                .default
                .map(|literal| literal.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<10} {:<8} default={:<8} {}",
                definition.name,
                definition.kind.as_str(),
                default,
                definition.label
            );
        }
    }
    Ok(0)
}

pub(super) fn run_potentials_command(args: PotentialsArgs) -> Result<i32, CliError> {
    let reaction: ReactionType = args.reaction.parse().map_err(CliError::Compute)?;
    let records = potential::defaults_for(reaction);
    let syntax = SlotSyntax::from_array_flag(args.array_syntax);
    print!("{}", potential::generate_potentials(&records, syntax));
    if potential::needs_terminator(&records) {
        println!("{}", potential::TERMINATOR);
    }
    Ok(0)
}

pub(super) fn run_categorize_command(args: CategorizeArgs) -> Result<i32, CliError> {
    let profile: InputProfile = args.profile.parse().map_err(CliError::Compute)?;
    let mut session = FrescoSession::new(SessionOptions::new(ReactionType::default(), profile));

    if let Some(input) = &args.input {
        let summary = session.load_input(&read_text(input)?);
        eprintln!("{}", summary.message);
    }
    if args.reset {
        session.categorization_mut().reset();
    }
    for raw in &args.moves {
        let (name, bucket) = parse_move(raw)?;
        session
            .categorization_mut()
            .move_parameter(name, bucket)
            .map_err(CliError::Compute)?;
    }

    if args.json {
        print_json(&session.categorization().current())?;
        return Ok(0);
    }

    let store = session.categorization();
    for bucket in [Bucket::General, Bucket::Advanced] {
        println!("{bucket}:");
        for (category, definitions) in store.group_by_category(bucket) {
            let names: Vec<String> = definitions
                .iter()
                .map(|definition| {
                    if store.is_from_file(definition.name) {
                        format!("{}*", definition.name)
                    } else {
                        definition.name.to_string()
                    }
                })
                .collect();
            println!("  {category}: {}", names.join(" "));
        }
    }
    Ok(0)
}

pub(super) fn run_shapes_command(args: ShapesArgs) -> Result<i32, CliError> {
    let info = catalog::potential_type(args.type_code).ok_or_else(|| {
        CliError::Compute(FrescoError::input_validation(
            "INPUT.POTENTIAL_TYPE",
            format!("unknown potential type {}", args.type_code),
        ))
    })?;

    println!("type {}: {}", info.code, info.label);
    let shapes = catalog::shapes_for_type(info.code);
    if shapes.is_empty() {
        println!("  shape is not read for this type");
    }
    for shape in shapes {
        match shape.formula {
            Some(formula) => println!("  {:>3} {} [{formula}]", shape.code, shape.label),
            None => println!("  {:>3} {}", shape.code, shape.label),
        }
    }
    Ok(0)
}
