//! Presence-condition preprocessing from the command line.
//!
//! Builds literal groups for a feature model with the given core/dead features,
//! runs the pass, and prints the grouped conditions and the dictionary.
//!
//! Run with: `cargo run --example twise -- --vars 4 --fixed 1,-3`
//! Custom groups: `cargo run --example twise -- --vars 4 --group 1,2 --group -2,4`

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;

use twise_rs::assignment::FixedAssignment;
use twise_rs::expression::{literal_group, literal_groups, Expression};
use twise_rs::literal::Lit;
use twise_rs::manager::{ManagerConfig, PresenceConditionManager};
use twise_rs::table::MAX_BITS;

#[derive(Parser, Debug)]
#[command(name = "twise")]
#[command(about = "Preprocess presence conditions for t-wise sampling")]
struct Args {
    /// Number of feature variables
    #[arg(short, long, default_value_t = 4)]
    vars: u32,

    /// Core/dead features as comma-separated signed literals, e.g. "1,-3"
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    fixed: String,

    /// A group of literals, e.g. "1,-2" (repeatable; default: all literals)
    #[arg(short, long, allow_hyphen_values = true)]
    group: Vec<String>,

    /// Log2 of the canonicalization table size
    #[arg(long, default_value_t = 12)]
    table_bits: usize,

    /// Keep interning order instead of sorting groups
    #[arg(long)]
    no_sort: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn parse_literals(text: &str, num_vars: u32) -> Result<Vec<Lit>> {
    let mut literals = Vec::new();
    for part in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let value: i32 = part.parse()?;
        if value == 0 || value.unsigned_abs() > num_vars {
            return Err(eyre!("Literal {} is out of range for {} variables", value, num_vars));
        }
        literals.push(Lit::new(value));
    }
    Ok(literals)
}

fn config_from_args(args: &Args) -> Result<ManagerConfig> {
    if args.table_bits > MAX_BITS {
        return Err(eyre!("Table bits {} must be in the range 0..={}", args.table_bits, MAX_BITS));
    }
    Ok(ManagerConfig::default()
        .with_table_bits(args.table_bits)
        .with_sort_groups(!args.no_sort))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = config_from_args(&args)?;
    let fixed = FixedAssignment::new(args.vars, parse_literals(&args.fixed, args.vars)?);
    let groups: Vec<Vec<Expression>> = if args.group.is_empty() {
        literal_groups(args.vars)
    } else {
        args.group
            .iter()
            .map(|g| parse_literals(g, args.vars).map(literal_group))
            .collect::<Result<_>>()?
    };

    log::info!(
        "Core: {:?}, dead: {:?}",
        fixed.core().iter().map(|v| v.id()).collect::<Vec<_>>(),
        fixed.dead().iter().map(|v| v.id()).collect::<Vec<_>>()
    );

    let pcm = PresenceConditionManager::with_config(args.vars, &fixed, &groups, &config);

    println!("── Groups ──\n");
    for (index, ids) in pcm.grouped_presence_conditions().iter().enumerate() {
        println!("Group {} ({} conditions):", index, ids.len());
        for &id in ids {
            let pc = pcm.condition(id);
            println!("  {} {}  groups={:?}", id, pc, pc.groups().collect::<Vec<_>>());
        }
    }

    println!("\n── Dictionary ──\n");
    for v in 1..=args.vars as i32 {
        for lit in [Lit::new(v), Lit::new(-v)] {
            let ids = pcm.dictionary_ids(lit);
            if !ids.is_empty() {
                let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                println!("  {:>4} -> {}", lit.get(), ids.join(", "));
            }
        }
    }

    println!("\n{}", pcm.stats());

    Ok(())
}
