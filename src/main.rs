use clap::{Args, Parser, Subcommand};
use log::{debug, error};

use kitchen_finder::dialogs::confirm_account_deletion;
use kitchen_finder::voice::ScriptedRecognizer;
use kitchen_finder::{
    share_link, ApiClient, Cuisine, CustomRecipeDraft, FavoriteSaved, FinderConfig, FinderError,
    IngredientInput, NutritionBars, RecipeId, RecipeResult, SavedRecipe, SearchSession,
    Session, ShareKind, VoiceInput,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find recipes with the ingredients you have", long_about = None)]
struct Cli {
    /// Backend base URL (overrides KITCHEN__BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token from a previous login (overrides KITCHEN__TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes for a comma separated list of ingredients
    Search {
        #[command(flatten)]
        input: IngredientArgs,
        /// Cuisine filter, e.g. italian or "middle eastern"
        #[arg(short, long, default_value = "any")]
        cuisine: Cuisine,
    },
    /// Show the ingredient tags a text (and optional voice input) produces
    Tags {
        #[command(flatten)]
        input: IngredientArgs,
        /// Remove the tag at this position before printing
        #[arg(long)]
        remove: Option<usize>,
    },
    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Manage your own recipes
    Custom {
        #[command(subcommand)]
        action: CustomAction,
    },
    /// Log in and print a token for KITCHEN__TOKEN
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print a token for KITCHEN__TOKEN
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Send a password reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Permanently delete the logged in account
    DeleteAccount {
        #[arg(long)]
        password: String,
        /// Must be exactly "DELETE MY ACCOUNT"
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Args, Debug)]
struct IngredientArgs {
    /// Ingredients, comma separated
    #[arg(default_value = "")]
    ingredients: String,
    /// A spoken utterance to append, as a speech recognizer would deliver it (repeatable)
    #[arg(long = "say")]
    utterances: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum FavoriteAction {
    List,
    /// Save a recipe from a JSON file (one search result)
    Save { file: String },
    Remove { id: String },
    /// Print the share link of a favorite
    Share { id: String },
}

#[derive(Subcommand, Debug)]
enum CustomAction {
    List,
    Create {
        #[arg(long)]
        title: String,
        /// Ingredient line (repeatable, at least 2)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Instruction step (repeatable, at least 1)
        #[arg(long = "step")]
        steps: Vec<String>,
        #[arg(long, default_value_t = 4)]
        servings: u32,
    },
    Delete { id: String },
    /// Print the share link of a custom recipe
    Share { id: String },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), FinderError> {
    let mut config = FinderConfig::load()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if let Some(token) = cli.token {
        config.token = Some(token);
    }
    debug!("Using backend {}", config.base_url);

    let client = ApiClient::new(&config)?;
    let mut session = config
        .token
        .as_deref()
        .map(Session::with_token)
        .unwrap_or_default();

    match cli.command {
        Command::Search { input, cuisine } => {
            let input = collect_ingredients(&input);
            let mut search = SearchSession::new();
            search.run(&client, input.text(), cuisine).await?;
            if let Some(response) = search.finish()? {
                if response.is_empty() {
                    println!("No recipes found. Try different ingredients!");
                }
                for (tier, onion_garlic, recipes) in response.iter() {
                    println!(
                        "\n== {} ({}) / {} ({} recipes)",
                        tier.label(),
                        tier.description(),
                        onion_garlic.label(),
                        recipes.len()
                    );
                    for recipe in recipes {
                        print_recipe(recipe);
                    }
                }
            }
        }
        Command::Tags { input, remove } => {
            let mut input = collect_ingredients(&input);
            if let Some(index) = remove {
                if index < input.tags().len() {
                    input.remove_tag(index);
                } else {
                    eprintln!("No tag at position {}", index);
                }
            }
            println!("{}", input.text());
            for (i, tag) in input.tags().iter().enumerate() {
                println!("  [{}] {}", i, tag);
            }
        }
        Command::Favorites { action } => match action {
            FavoriteAction::List => {
                let favorites = client.list_favorites(&session).await?;
                print_saved(&favorites, &config.share_origin, ShareKind::Favorite);
            }
            FavoriteAction::Save { file } => {
                let body = tokio::fs::read_to_string(&file)
                    .await
                    .map_err(|e| FinderError::BuilderError(format!("{}: {}", file, e)))?;
                let recipe: RecipeResult = serde_json::from_str(&body)
                    .map_err(|e| FinderError::BuilderError(format!("{}: {}", file, e)))?;
                match client.save_favorite(&session, &recipe).await? {
                    FavoriteSaved::Added => println!("Saved '{}' to favorites", recipe.title),
                    FavoriteSaved::AlreadySaved => {
                        println!("'{}' is already in your favorites", recipe.title)
                    }
                }
            }
            FavoriteAction::Remove { id } => {
                client
                    .remove_favorite(&session, &RecipeId::from(id.as_str()))
                    .await?;
                println!("Removed favorite {}", id);
            }
            FavoriteAction::Share { id } => {
                let favorites = client.list_favorites(&session).await?;
                print_share(&favorites, &id, &config.share_origin, ShareKind::Favorite);
            }
        },
        Command::Custom { action } => match action {
            CustomAction::List => {
                let recipes = client.list_custom(&session).await?;
                print_saved(&recipes, &config.share_origin, ShareKind::Custom);
            }
            CustomAction::Create {
                title,
                ingredients,
                steps,
                servings,
            } => {
                let mut draft = CustomRecipeDraft::new(title).servings(servings);
                for ingredient in &ingredients {
                    draft.add_ingredient(ingredient);
                }
                for step in &steps {
                    draft.add_instruction(step);
                }
                let body = draft.validate()?;
                let created = client.create_custom(&session, &body).await?;
                println!("Created '{}' ({})", created.recipe.title, created.recipe.id);
            }
            CustomAction::Delete { id } => {
                client
                    .delete_custom(&session, &RecipeId::from(id.as_str()))
                    .await?;
                println!("Deleted recipe {}", id);
            }
            CustomAction::Share { id } => {
                let recipes = client.list_custom(&session).await?;
                print_share(&recipes, &id, &config.share_origin, ShareKind::Custom);
            }
        },
        Command::Login { email, password } => {
            let auth = client.login(&email, &password).await?;
            println!("Welcome back, {}", auth.user.name);
            println!("export KITCHEN__TOKEN={}", auth.access_token);
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let auth = client.register(&name, &email, &password).await?;
            println!("Account created for {}", auth.user.email);
            println!("export KITCHEN__TOKEN={}", auth.access_token);
        }
        Command::ForgotPassword { email } => {
            let message = client.forgot_password(&email).await?;
            if message.is_empty() {
                println!("If an account exists for {}, a reset email is on its way", email);
            } else {
                println!("{}", message);
            }
        }
        Command::DeleteAccount { password, confirm } => {
            confirm_account_deletion(&confirm)?;
            client.delete_account(&mut session, &password).await?;
            println!("Your account has been deleted");
        }
    }

    Ok(())
}

/// Typed text plus any utterances, fed through the voice capture path
fn collect_ingredients(args: &IngredientArgs) -> IngredientInput {
    let mut input = IngredientInput::new();
    input.set_text(args.ingredients.as_str());

    let mut voice = VoiceInput::new(ScriptedRecognizer::new(args.utterances.iter().cloned()));
    while voice.recognizer_mut().remaining() > 0 && voice.start() {
        match voice.recognizer_mut().take_utterance() {
            Some(utterance) => voice.on_result(&mut input, &utterance),
            None => voice.on_end(),
        }
    }
    input
}

fn print_recipe(recipe: &RecipeResult) {
    let bars = NutritionBars::relative(&recipe.nutrition);
    println!(
        "  - {} [{}] {} min, {} servings, {} cal (protein {:.0}g, carbs {:.0}g, fat {:.0}g, fiber {:.0}g)",
        recipe.title,
        recipe.id,
        recipe.ready_in_minutes,
        recipe.servings,
        bars.calories,
        recipe.nutrition.protein,
        recipe.nutrition.carbs,
        recipe.nutrition.fat,
        recipe.nutrition.fiber,
    );
}

fn print_saved(recipes: &[SavedRecipe], origin: &str, kind: ShareKind) {
    if recipes.is_empty() {
        println!("Nothing here yet");
        return;
    }
    for saved in recipes {
        print_recipe(&saved.recipe);
        if let Some(link) = share_link(origin, kind, saved) {
            println!("    share: {}", link);
        }
    }
}

fn print_share(recipes: &[SavedRecipe], id: &str, origin: &str, kind: ShareKind) {
    let found = recipes.iter().find(|r| r.recipe.id.to_string() == id);
    match found.and_then(|r| share_link(origin, kind, r)) {
        Some(link) => println!("{}", link),
        None => eprintln!("No shareable recipe with id {}", id),
    }
}
