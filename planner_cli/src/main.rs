use clap::{Parser, Subcommand, ValueEnum};
use planner_core::preferences::{expand_focused_body_parts, parse_preferred_category};
use planner_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wplan")]
#[command(about = "Personalized workout plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Exercise catalog CSV (Title, Type, BodyPart columns)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log planning decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout plan
    Plan(PlanArgs),

    /// Show BMI and the focus it suggests
    Bmi {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in metres
        #[arg(long)]
        height: f64,
    },

    /// Summarize and validate the exercise catalog
    Catalog,

    /// Write a default config file
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args)]
struct PlanArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in metres
    #[arg(long)]
    height: f64,

    /// Experience level (beginner, intermediate, advanced)
    #[arg(long, default_value = "Beginner")]
    level: Level,

    /// Number of workout days (1-7)
    #[arg(long, default_value_t = 3)]
    days: u32,

    /// Exercises per day (1-10)
    #[arg(long, default_value_t = 5)]
    per_day: u32,

    /// Predicted fitness focus (Fat_Loss, Muscle_Gain, General_Fitness, Weight_Loss)
    #[arg(long)]
    focus: Option<FocusLabel>,

    /// Override the focus with a muscle or fat-loss goal
    #[arg(long, value_enum)]
    goal: Option<Goal>,

    /// Preferred workout type (Mixed, Cardio, HIIT, Strength, ...)
    #[arg(long)]
    prefer: Option<String>,

    /// Comma-separated body parts to emphasise
    #[arg(long, value_delimiter = ',')]
    body_parts: Vec<String>,

    /// Seed for a reproducible plan
    #[arg(long)]
    seed: Option<u64>,

    /// Append every finisher exercise instead of inserting at fixed positions
    #[arg(long)]
    append_only: bool,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Goal {
    Muscle,
    Fat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        planner_core::logging::init_with_level("debug");
    } else {
        planner_core::logging::init();
    }

    match cli.command {
        Commands::Plan(args) => {
            let config = load_config(cli.config.as_deref())?;
            let catalog_path = cli.catalog.or_else(|| config.catalog.path.clone());
            cmd_plan(args, catalog_path, &config)
        }
        Commands::Bmi { weight, height } => cmd_bmi(weight, height),
        Commands::Catalog => {
            let config = load_config(cli.config.as_deref())?;
            cmd_catalog(cli.catalog.or(config.catalog.path))
        }
        Commands::InitConfig { force } => cmd_init_config(cli.config, force),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn load_catalog(path: Option<PathBuf>) -> Result<ExerciseCatalog> {
    match path {
        Some(path) => ExerciseCatalog::from_csv_path(&path),
        None => Ok(default_catalog().clone()),
    }
}

fn cmd_plan(args: PlanArgs, catalog_path: Option<PathBuf>, config: &Config) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let profile = UserProfile {
        level: args.level,
        workout_days: args.days,
        exercises_per_day: args.per_day,
        weight_kg: args.weight,
        height_m: args.height,
    };
    if let Level::Other(ref level) = profile.level {
        tracing::warn!("Unrecognized level '{}', using default ranges", level);
    }

    let bmi = profile.bmi();
    let focus = match args.goal {
        Some(Goal::Muscle) => FocusLabel::MuscleGain,
        Some(Goal::Fat) => FocusLabel::FatLoss,
        None => args.focus.unwrap_or_else(|| suggest_focus_from_bmi(bmi)),
    };

    let preferred = match args.prefer.as_deref() {
        Some(value) => parse_preferred_category(value)?,
        None => None,
    };
    let body_parts = expand_focused_body_parts(args.body_parts.as_slice())?;

    let mut request = PlanRequest::new(focus, profile).with_focused_body_parts(body_parts);
    request.preferred_category = preferred;

    let placement = if args.append_only {
        FinisherPlacement::Append
    } else {
        config.planner.finisher_placement
    };
    let planner = Planner::new(&catalog).with_placement(placement);

    let plan = match args.seed.or(config.planner.seed) {
        Some(seed) => planner.generate(&request, &mut seeded_rng(seed), &mut TracingObserver)?,
        None => planner.generate(&request, &mut entropy_rng(), &mut TracingObserver)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Your calculated BMI is: {:.1}", bmi);
    println!("Suggested focus from BMI: {}", suggest_focus_from_bmi(bmi));
    println!("Planning for focus: {}", request.focus);
    match &request.preferred_category {
        Some(category) => println!(
            "Based on your preference, we will primarily use {} workouts \
             (with a few variations) in your plan.",
            category
        ),
        None => println!(
            "Based on your profile, we recommend the following workout type(s): {}",
            request.focus.categories().join(", ")
        ),
    }

    display_plan(&plan);
    Ok(())
}

fn cmd_bmi(weight: f64, height: f64) -> Result<()> {
    if !(weight > 0.0 && height > 0.0) {
        return Err(Error::InvalidInput(
            "weight and height must be positive".into(),
        ));
    }

    let value = planner_core::bmi(weight, height);
    println!("Your calculated BMI is: {:.1}", value);
    println!(
        "Based on your BMI, a default focus of {} is suggested.",
        suggest_focus_from_bmi(value)
    );
    println!("Fitness goal: {}", fitness_goal_advice(value));
    Ok(())
}

fn cmd_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_config_path()?,
    };

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn cmd_catalog(catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    println!("{} exercises", catalog.len());
    for (kind, count) in catalog.type_counts() {
        println!("  {:<24} {}", kind, count);
    }

    let missing: Vec<&str> = ESSENTIAL_BODY_PARTS
        .iter()
        .copied()
        .filter(|part| !catalog.has_body_part(part))
        .collect();
    if !missing.is_empty() {
        println!("Essential body parts without exercises: {}", missing.join(", "));
    }

    Ok(())
}

fn display_plan(plan: &WorkoutPlan) {
    println!();
    println!("Workout Plan:");

    for day in plan.days() {
        println!();
        println!("{}:", day.label);
        for ex in &day.exercises {
            println!("  {} ({})", ex.exercise, ex.kind);
            println!("    Body Part: {}", ex.body_part);
            println!("    Prescription: {} x {} reps", ex.sets, ex.reps);
        }
    }
}
