use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(author, version, about = "Storefront account tools: notifications, addresses, coupons")]
pub struct Cli {
    /// Directory holding config.json, the credential file and the log
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store an access token for later commands
    Login {
        token: String,
    },

    /// Forget the stored access token
    Logout,

    /// In-app notifications
    #[command(subcommand)]
    Notifications(NotificationsCommand),

    /// Saved delivery addresses
    #[command(subcommand)]
    Addresses(AddressesCommand),

    /// Referral coupons for a brief's cart
    #[command(subcommand)]
    Coupon(CouponCommand),
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List notifications with their age
    List,

    /// Mark notifications as read (all unread ones when no id is given)
    Read {
        ids: Vec<u64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AddressesCommand {
    /// List saved addresses
    List,

    /// Add a new address
    Add(AddressArgs),

    /// Delete an address
    Delete {
        id: u64,
    },

    /// Make an address the default one
    Default {
        id: u64,

        /// Clear the default flag instead
        #[arg(long)]
        unset: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct AddressArgs {
    #[arg(long)]
    pub street_name: String,

    #[arg(long)]
    pub house_number: String,

    #[arg(long, default_value = "")]
    pub ap_suite: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub postal_code: String,

    /// Two-letter state code, e.g. IL
    #[arg(long)]
    pub state: String,

    #[arg(long)]
    pub default: bool,
}

#[derive(Debug, Subcommand)]
pub enum CouponCommand {
    /// List coupons available to the account
    List,

    /// Apply a coupon code to a brief's cart
    Apply {
        brief_id: String,
        code: String,
    },
}
