use anyhow::Context;
use tracing::{info, warn};

use crate::config::ListConfig;
use crate::linked_list::LinkedList;

type Result<T> = anyhow::Result<T>;

/// Owns the list a front end is working on for the length of one run.
///
/// Every reset releases the previous list before the new one is built, and
/// [`ListSession::finish`] releases whatever is left on the way out.
pub struct ListSession<T> {
    list: LinkedList<T>,
    config: ListConfig,
    resets: usize,
}

impl<T> ListSession<T> {
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    pub fn with_config(config: ListConfig) -> Self {
        ListSession {
            list: LinkedList::with_config(config),
            config,
            resets: 0,
        }
    }

    /// Replaces the current list with `count` values read in order.
    ///
    /// On failure the session keeps an empty list, so later operations still
    /// have something valid to work on.
    pub fn reset<I>(&mut self, count: i64, values: I) -> Result<&LinkedList<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.list.destroy();

        match LinkedList::construct_with_config(self.config, count, values) {
            Ok(list) => {
                self.list = list;
                self.resets += 1;
                info!(len = self.list.len(), resets = self.resets, "list reset");
                Ok(&self.list)
            }
            Err(err) => {
                warn!(%err, "list reset failed, keeping an empty list");
                Err(err).with_context(|| format!("failed to build a list of {} elements", count))
            }
        }
    }

    pub fn list(&self) -> &LinkedList<T> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut LinkedList<T> {
        &mut self.list
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Releases the current list and ends the session.
    pub fn finish(mut self) -> usize {
        let released = self.list.destroy();
        info!(released, "session finished");
        released
    }
}

impl<T> Default for ListSession<T> {
    fn default() -> Self {
        Self::new()
    }
}
