use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Use the admin console login endpoint
        #[arg(long)]
        admin: bool,
    },

    /// Create an account and sign in with it
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },

    /// Clear the session from memory and disk
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// Evaluate the route guards for a path
    Route {
        /// Requested path, query string allowed
        path: String,
        /// Location recorded by an earlier login redirect
        #[arg(long)]
        from: Option<String>,
        /// Treat the path as a login/signup page
        #[arg(long)]
        guest: bool,
    },

    /// Authenticated GET
    Get { endpoint: String },

    /// Authenticated POST with a JSON body
    Post {
        endpoint: String,
        #[arg(long)]
        data: Option<String>,
    },

    /// Authenticated PUT with a JSON body
    Put {
        endpoint: String,
        #[arg(long)]
        data: Option<String>,
    },

    /// Authenticated DELETE
    Delete { endpoint: String },
}
