//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_bankroll(500.0)
///     .with_auto_wager(25.0)
///     .with_decks(6)
///     .with_max_turns(Some(100));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// The gambler's name.
    pub name: String,
    /// Starting bankroll.
    pub bankroll: f64,
    /// Starting auto-wager.
    pub auto_wager: f64,
    /// Number of 52-card decks in the shoe.
    pub decks: u8,
    /// Maximum number of turns to play, or `None` to play until the gambler
    /// cashes out or goes broke.
    pub max_turns: Option<u32>,
    /// How many times a rejected new auto-wager is asked for again before it
    /// is clamped to the bankroll.
    pub wager_retries: u8,
    /// Whether a two-card 21 on a split hand wins 3:2 instead of 1:1.
    pub split_blackjack_pays_bonus: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            name: String::from("Gambler"),
            bankroll: 1000.0,
            auto_wager: 100.0,
            decks: 3,
            max_turns: None,
            wager_retries: 3,
            split_blackjack_pays_bonus: false,
        }
    }
}

impl GameOptions {
    /// Sets the gambler's name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_name("Ada");
    /// assert_eq!(options.name, "Ada");
    /// ```
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_bankroll(250.0);
    /// assert_eq!(options.bankroll, 250.0);
    /// ```
    #[must_use]
    pub const fn with_bankroll(mut self, bankroll: f64) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the starting auto-wager.
    #[must_use]
    pub const fn with_auto_wager(mut self, auto_wager: f64) -> Self {
        self.auto_wager = auto_wager;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the maximum number of turns.
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Sets how many times a rejected auto-wager is asked for again.
    #[must_use]
    pub const fn with_wager_retries(mut self, retries: u8) -> Self {
        self.wager_retries = retries;
        self
    }

    /// Sets whether split-hand blackjacks win 3:2.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_split_blackjack_pays_bonus(true);
    /// assert!(options.split_blackjack_pays_bonus);
    /// ```
    #[must_use]
    pub const fn with_split_blackjack_pays_bonus(mut self, bonus: bool) -> Self {
        self.split_blackjack_pays_bonus = bonus;
        self
    }
}
