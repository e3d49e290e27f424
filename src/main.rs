use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use wordsieve::batch;
use wordsieve::config::{self, Overrides, Settings};
use wordsieve::{Oracle, PennTag, Rule, RuleSet, Verdict, WordNetOracle};

#[derive(Parser)]
#[command(
    name = "wordsieve",
    about = "Word sieve: keep lowercase base-form dictionary words for word games"
)]
struct Cli {
    /// Show how long rule evaluation took
    #[arg(long, global = true)]
    timing: bool,

    /// Show config resolution and rejection details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default search paths
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// WordNet dict directory (index.noun, verb.exc, ...)
    #[arg(long, global = true, env = "WORDSIEVE_WORDNET")]
    wordnet: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a word list (default when no subcommand is given)
    Filter {
        /// Word list to read [default: words.txt]
        #[arg(long)]
        input: Option<PathBuf>,
        /// File to write accepted words to [default: words_final.txt]
        #[arg(long)]
        output: Option<PathBuf>,
        /// Minimum word length [default: 3]
        #[arg(long)]
        min_length: Option<usize>,
    },
    /// Show the tag, lemma and verdict for each word
    Explain {
        #[arg(required = true)]
        words: Vec<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the active rules in evaluation order
    Rules,
}

#[derive(Serialize)]
struct Explanation {
    word: String,
    tag: PennTag,
    lemma: String,
    #[serde(flatten)]
    verdict: Verdict,
}

fn load_settings(cli: &Cli, mut overrides: Overrides) -> anyhow::Result<Settings> {
    let layers = config::load_layers(cli.config.as_deref(), &config::default_config_paths())?;
    if cli.verbose {
        if layers.is_empty() {
            eprintln!("[wordsieve] no config file found, using defaults");
        }
        for layer in &layers {
            eprintln!("[wordsieve] config: {}", layer.path.display());
        }
    }
    overrides.wordnet = cli.wordnet.clone();
    Ok(Settings::resolve(&overrides, &layers))
}

fn open_oracle(settings: &Settings, verbose: bool) -> anyhow::Result<WordNetOracle> {
    let dir = settings.wordnet_dir()?;
    let oracle = WordNetOracle::open(&dir)?;
    if verbose {
        eprintln!(
            "[wordsieve] wordnet: {} ({} lemmas)",
            dir.display(),
            oracle.wordnet().lemma_count()
        );
    }
    Ok(oracle)
}

fn cmd_filter(cli: &Cli, overrides: Overrides) -> anyhow::Result<i32> {
    let settings = load_settings(cli, overrides)?;
    let rules = settings.rule_set()?;
    let oracle = open_oracle(&settings, cli.verbose)?;

    let report = batch::run(&settings.input, &settings.output, &rules, &oracle)?;

    if cli.timing {
        eprintln!(
            "[wordsieve] rules took {:.1}ms",
            report.elapsed.as_secs_f64() * 1000.0
        );
    }
    if cli.verbose {
        eprintln!(
            "[wordsieve] read {} words from {}",
            report.read,
            settings.input.display()
        );
        for (rule, count) in &report.rejections {
            eprintln!("[wordsieve] rejected by {rule}: {count}");
        }
    }

    println!(
        "Filtered {} words written to {}",
        report.accepted,
        report.output.display()
    );
    Ok(0)
}

fn cmd_explain(cli: &Cli, words: &[String], json: bool) -> anyhow::Result<i32> {
    let settings = load_settings(cli, Overrides::default())?;
    let rules = settings.rule_set()?;
    let oracle = open_oracle(&settings, cli.verbose)?;

    let explanations: Vec<Explanation> = words
        .iter()
        .map(|word| Explanation {
            word: word.clone(),
            tag: oracle.tag(word),
            lemma: oracle.lemma(word),
            verdict: rules.evaluate(word, &oracle),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&explanations)?);
        return Ok(0);
    }

    for e in &explanations {
        let verdict = match e.verdict {
            Verdict::Accepted => "accepted".to_string(),
            Verdict::Rejected(rule) => format!("rejected by {rule}"),
        };
        println!("{}  {}  lemma={}  {verdict}", e.word, e.tag, e.lemma);
    }
    Ok(0)
}

fn describe(rule: Rule, rules: &RuleSet) -> String {
    match rule {
        Rule::MinimumLength => format!("word has at least {} characters", rules.min_length()),
        other => other.description().to_string(),
    }
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<i32> {
    let settings = load_settings(cli, Overrides::default())?;
    let rules = settings.rule_set()?;
    if rules.rules().is_empty() {
        eprintln!("[wordsieve] no rules configured, every word is accepted");
    }
    for (i, &rule) in rules.rules().iter().enumerate() {
        println!("{}. {rule}  ({})", i + 1, describe(rule, &rules));
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    let result = match &cli.command {
        None => cmd_filter(&cli, Overrides::default()),
        Some(Commands::Filter {
            input,
            output,
            min_length,
        }) => cmd_filter(
            &cli,
            Overrides {
                input: input.clone(),
                output: output.clone(),
                wordnet: None,
                min_length: *min_length,
            },
        ),
        Some(Commands::Explain { words, json }) => cmd_explain(&cli, words, *json),
        Some(Commands::Rules) => cmd_rules(&cli),
    };
    let exit_code = result.unwrap_or_else(|e| {
        eprintln!("[wordsieve] error: {e:#}");
        1
    });
    std::process::exit(exit_code);
}
