use std::io::{BufRead, Write};

use anyhow::Result;
use apiquery_core::{ApiClient, Completion, QueryError};

use crate::{
    input::{IdRange, read_line, read_valid_id},
    render,
};

const MENU: &str = "\nChoose an option:
1. Look up user info
2. Search posts by user
3. Check crypto price
4. Get Weather Info
5. Filter Todos
6. Exit";

const EXAMPLE_COINS: &str = "btc-bitcoin, eth-ethereum, doge-dogecoin";

/// Interactive menu over an input/output pair.
pub struct Session<R, W> {
    client: ApiClient,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(client: ApiClient, input: R, out: W) -> Self {
        Self { client, input, out }
    }

    /// Show the menu until the user picks "Exit" or the input ends.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(40))?;
        writeln!(self.out, "   Dynamic API Query Demo")?;
        writeln!(self.out, "{}", "=".repeat(40))?;

        loop {
            writeln!(self.out, "{MENU}")?;
            let choice = read_line(&mut self.input, &mut self.out, "\nEnter choice (1-6): ")?;
            tracing::debug!(?choice, "menu choice");

            match choice.as_deref() {
                Some("1") => self.user_info().await?,
                Some("2") => self.search_posts().await?,
                Some("3") => self.crypto_price().await?,
                Some("4") => self.weather_info().await?,
                Some("5") => self.search_todos().await?,
                Some("6") | None => {
                    writeln!(self.out, "\nGoodbye!")?;
                    return Ok(());
                }
                Some(_) => writeln!(self.out, "Invalid choice. Please try again.")?,
            }
        }
    }

    async fn user_info(&mut self) -> Result<()> {
        let Some(user_id) = self.read_id("Enter user ID (1-10): ")? else {
            return Ok(());
        };

        match self.client.user(&user_id).await {
            Ok(user) => write!(self.out, "{}", render::user(&user_id, &user))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    async fn search_posts(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== Post Search ===\n")?;

        let Some(user_id) = self.read_id("Enter user ID to see their posts (1-10): ")? else {
            return Ok(());
        };

        match self.client.posts_by_user(&user_id).await {
            Ok(posts) => write!(self.out, "{}", render::posts(&user_id, &posts))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    async fn crypto_price(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== Cryptocurrency Price Checker ===\n")?;
        writeln!(self.out, "Available coins: {EXAMPLE_COINS}")?;

        let Some(coin_id) = self.read("Enter coin ID (e.g., btc-bitcoin): ")? else {
            return Ok(());
        };
        let coin_id = coin_id.to_lowercase();

        match self.client.ticker(&coin_id).await {
            Ok(ticker) => write!(self.out, "{}", render::ticker(&ticker))?,
            Err(QueryError::Status { status, .. }) => {
                tracing::debug!(%status, coin_id = %coin_id, "ticker not available");
                writeln!(self.out, "\nCoin '{coin_id}' not found!")?;
                writeln!(self.out, "Try: {EXAMPLE_COINS}")?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    async fn weather_info(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== Weather Information Lookup ===")?;

        let Some(city) = self.read("Enter city name (e.g., Delhi, Tokyo, New York): ")? else {
            return Ok(());
        };

        let coords = match self.client.coordinates(&city).await {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                writeln!(self.out, "Could not find coordinates for '{city}'.")?;
                return Ok(());
            }
            Err(e) => return self.report(&e),
        };

        match self.client.current_weather(&coords).await {
            Ok(current) => write!(self.out, "{}", render::weather(&coords, &current))?,
            Err(QueryError::Status { status, .. }) => {
                tracing::debug!(%status, city = %coords.name, "forecast rejected");
                writeln!(self.out, "\nError fetching weather data for {}.", coords.name)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    async fn search_todos(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== Todo List Filter ===")?;

        let Some(answer) = self.read("View completed tasks? (y/n): ")? else {
            return Ok(());
        };
        let Some(completion) = Completion::from_answer(&answer) else {
            writeln!(self.out, "Invalid input. Please enter 'y' or 'n'.")?;
            return Ok(());
        };

        match self.client.todos(completion).await {
            Ok(todos) => write!(self.out, "{}", render::todos(completion, &todos))?,
            Err(QueryError::Status { status, .. }) => {
                tracing::debug!(%status, "todos rejected");
                writeln!(self.out, "Failed to retrieve todos.")?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(read_line(&mut self.input, &mut self.out, prompt)?)
    }

    fn read_id(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(read_valid_id(&mut self.input, &mut self.out, prompt, IdRange::default())?)
    }

    fn report(&mut self, err: &QueryError) -> Result<()> {
        tracing::debug!(error = %err, "query failed");
        match err {
            QueryError::Connection(_) => writeln!(self.out, "{err}")?,
            QueryError::Status { .. }
            | QueryError::InvalidUrl(_)
            | QueryError::Decode { .. } => writeln!(self.out, "Error: {err}")?,
        }
        Ok(())
    }
}
