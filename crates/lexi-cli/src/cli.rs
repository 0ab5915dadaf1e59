use clap::{Args, Parser, Subcommand};
use lexi_shared::{
    analysis::RiskLevel, const_config::client::CLIENT_DEFAULT_CONFIG_FILE,
    document::PermissionLevel, id::DbId,
};
use std::path::PathBuf;

/// Talks to the LexiAI backend from the terminal.
///
/// The token and selected organization are kept between runs in the storage
/// file named in the configuration
#[derive(Parser, Debug)]
#[command(name = "lexi", author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        global = true,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    /// Configuration file, missing files are ignored
    #[arg(long, value_name = "FILE", global = true, default_value = CLIENT_DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Overrides the API base url from the configuration
    #[arg(long, value_name = "URL", global = true)]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Logs in and keeps the token for later commands
    Login(LoginArgs),
    /// Creates an account and its first organization then logs in
    Register(RegisterArgs),
    Logout,
    /// Shows the logged in user
    Whoami,
    #[command(subcommand)]
    Password(PasswordCommand),
    #[command(subcommand, name = "orgs")]
    Organizations(OrganizationCommand),
    #[command(subcommand, name = "docs")]
    Documents(DocumentCommand),
    #[command(subcommand)]
    Ai(AiCommand),
    #[command(subcommand)]
    Billing(BillingCommand),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    pub email: String,
    /// Prompted for if not supplied
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long = "organization")]
    pub organization_name: String,
    /// Prompted for (twice) if not supplied
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Subcommand, Debug)]
pub enum PasswordCommand {
    /// Changes the password of the logged in user
    Change,
    /// Asks for a reset link to be sent to `email`
    Forgot { email: String },
    /// Sets a new password using the token from the reset link
    Reset { reset_token: String },
}

#[derive(Subcommand, Debug)]
pub enum OrganizationCommand {
    /// Lists organizations, the selected one is marked with `*`
    List,
    Show { id: DbId },
    Create {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Selects the organization used by later commands
    Switch { id: DbId },
}

#[derive(Subcommand, Debug)]
pub enum DocumentCommand {
    List {
        #[command(flatten)]
        organization: OrganizationArg,
        #[command(flatten)]
        paging: PageArgs,
    },
    Upload {
        file: PathBuf,
        /// Defaults to the file name without its extension
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        organization: OrganizationArg,
    },
    Show {
        id: DbId,
    },
    /// Saves the original file
    Download {
        id: DbId,
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    Rename {
        id: DbId,
        title: String,
    },
    Delete {
        id: DbId,
    },
    Share {
        id: DbId,
        #[arg(long = "user")]
        user_id: DbId,
        #[arg(long, default_value_t = PermissionLevel::Read)]
        permission: PermissionLevel,
    },
    Shares {
        id: DbId,
    },
    Unshare {
        id: DbId,
        #[arg(long = "user")]
        user_id: DbId,
    },
    /// Documents other users shared with you
    Shared {
        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct OrganizationArg {
    /// Uses the selected organization if not supplied
    #[arg(long = "org", value_name = "ID")]
    pub organization_id: Option<DbId>,
}

#[derive(Args, Debug, Default)]
pub struct PageArgs {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub per_page: Option<u32>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum AiCommand {
    /// Starts the analysis of a document
    Analyze { id: DbId },
    Clauses {
        id: DbId,
        #[arg(long)]
        risk: Option<RiskLevel>,
        #[arg(long)]
        category: Option<DbId>,
    },
    Summary { id: DbId },
    Obligations { id: DbId },
    /// Asks a question about a document
    Search { id: DbId, query: String },
    History { id: DbId },
    Categories,
}

#[derive(Subcommand, Debug)]
pub enum BillingCommand {
    Plans,
    Subscribe {
        plan_id: String,
        #[arg(long)]
        payment_method: Option<String>,
    },
    ChangePlan {
        plan_id: String,
    },
    Cancel,
}
