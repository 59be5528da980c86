//! Game configuration options.

/// Configuration options for a showdown game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ace_showdown::GameOptions;
///
/// let options = GameOptions::default().with_deal_after_restart(true);
/// assert!(options.deal_after_restart);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Whether a round is dealt straight from the fresh deck after a short
    /// deck forces a restart. When `false` the restart ends the request and
    /// the caller has to draw again.
    pub deal_after_restart: bool,
}

impl GameOptions {
    /// Sets whether a round is dealt right after an automatic restart.
    ///
    /// # Example
    ///
    /// ```
    /// use ace_showdown::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_after_restart(false);
    /// assert_eq!(options.deal_after_restart, false);
    /// ```
    #[must_use]
    pub const fn with_deal_after_restart(mut self, deal: bool) -> Self {
        self.deal_after_restart = deal;
        self
    }
}
