//! Placeholder allocation, binding and ordered parameter output.

use super::{Placeholder, Value};
use crate::config::BuilderConfig;
use crate::error::{ClauseError, ClauseResult};
use crate::statement::BuiltQuery;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Per-statement allocator and store of placeholder values.
///
/// Ids are handed out sequentially from the configured first id and are
/// never reused until [`Registry::reset`]. Clearing a clause does not
/// release its placeholders; they stay allocated and keep their position in
/// [`Registry::bound_values`].
///
/// Cloning copies the values into a new registry lifetime: tokens issued by
/// the original are foreign to the copy and the other way round.
#[derive(Debug)]
pub struct Registry {
    prefix: Arc<str>,
    first_id: u32,
    max_placeholders: u32,
    generation: u64,
    /// Slot `i` holds the value for id `first_id + i`; `None` is reserved but unbound.
    entries: Vec<Option<Value>>,
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            first_id: self.first_id,
            max_placeholders: self.max_placeholders,
            generation: next_generation(),
            entries: self.entries.clone(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry with the default configuration (`$1`, `$2`, ...).
    pub fn new() -> Self {
        Self::with_config(&BuilderConfig::default())
    }

    /// Create a registry from a configuration.
    ///
    /// The configuration is assumed valid; see [`BuilderConfig::validate`].
    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            prefix: Arc::from(config.placeholder_prefix.as_str()),
            first_id: config.first_id,
            max_placeholders: config.max_placeholders,
            generation: next_generation(),
            entries: Vec::new(),
        }
    }

    /// Prefix used for every token from this registry.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Id of the first allocation.
    pub fn first_id(&self) -> u32 {
        self.first_id
    }

    /// Number of live placeholders (bound or reserved).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id the next allocation will receive.
    pub fn next_id(&self) -> ClauseResult<u32> {
        let count = u32::try_from(self.entries.len())
            .map_err(|_| ClauseError::allocation("placeholder id space exhausted"))?;
        self.first_id
            .checked_add(count)
            .ok_or_else(|| ClauseError::allocation("placeholder id space exhausted"))
    }

    fn issue(&self) -> ClauseResult<Placeholder> {
        if self.entries.len() >= self.max_placeholders as usize {
            return Err(ClauseError::allocation(format!(
                "registry is full ({} placeholders)",
                self.max_placeholders
            )));
        }
        let id = self.next_id()?;
        tracing::trace!(target: "pgclause.placeholder", id, prefix = %self.prefix, "allocate");
        Ok(Placeholder::new(id, self.prefix.clone(), self.generation))
    }

    /// Allocate the next placeholder and bind `value` to it.
    pub fn allocate(&mut self, value: impl Into<Value>) -> ClauseResult<Placeholder> {
        let placeholder = self.issue()?;
        self.entries.push(Some(value.into()));
        Ok(placeholder)
    }

    /// Allocate the next placeholder without a value; bind it later with [`Registry::bind`].
    pub fn reserve(&mut self) -> ClauseResult<Placeholder> {
        let placeholder = self.issue()?;
        self.entries.push(None);
        Ok(placeholder)
    }

    /// Bind a value to a reserved placeholder. A placeholder is bound at most once.
    pub fn bind(&mut self, placeholder: &Placeholder, value: impl Into<Value>) -> ClauseResult<()> {
        let index = self.index_of(placeholder)?;
        let slot = &mut self.entries[index];
        if slot.is_some() {
            return Err(ClauseError::allocation(format!(
                "placeholder {placeholder} is already bound"
            )));
        }
        *slot = Some(value.into());
        Ok(())
    }

    /// Check whether this registry issued `placeholder` in its current lifetime.
    pub fn contains(&self, placeholder: &Placeholder) -> bool {
        self.index_of(placeholder).is_ok()
    }

    /// Whether a value has been bound to `placeholder`.
    pub fn has_value(&self, placeholder: &Placeholder) -> ClauseResult<bool> {
        Ok(self.entries[self.index_of(placeholder)?].is_some())
    }

    /// The value bound to `placeholder`, if any.
    pub fn value(&self, placeholder: &Placeholder) -> ClauseResult<Option<&Value>> {
        Ok(self.entries[self.index_of(placeholder)?].as_ref())
    }

    /// Render a placeholder issued by this registry as `prefix + id`.
    pub fn render(&self, placeholder: &Placeholder) -> ClauseResult<String> {
        self.index_of(placeholder)?;
        Ok(placeholder.name())
    }

    /// All values in ascending id order, for positional binding.
    ///
    /// Fails if any placeholder is still reserved without a value, since
    /// every later value would otherwise bind to the wrong position.
    pub fn bound_values(&self) -> ClauseResult<Vec<Value>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.clone().ok_or_else(|| {
                    ClauseError::allocation(format!(
                        "placeholder {}{} has no bound value",
                        self.prefix,
                        self.first_id as usize + i
                    ))
                })
            })
            .collect()
    }

    /// Drop every allocation and restart numbering at the first id.
    ///
    /// Tokens issued before the reset are no longer recognised.
    pub fn reset(&mut self) {
        tracing::trace!(
            target: "pgclause.placeholder",
            released = self.entries.len(),
            "reset"
        );
        self.entries.clear();
        self.generation = next_generation();
    }

    /// Absorb a separately built query as a sub-select.
    ///
    /// Each of the query's values is re-allocated here, in order, and its
    /// tokens are renumbered into this registry's id space.
    pub fn allocate_query(&mut self, query: &BuiltQuery) -> ClauseResult<SubQuery> {
        let params = query.params();
        if self.entries.len() + params.len() > self.max_placeholders as usize {
            return Err(ClauseError::allocation(format!(
                "sub-query needs {} placeholders but only {} remain",
                params.len(),
                self.max_placeholders as usize - self.entries.len()
            )));
        }

        let tokens = query.tokens()?;

        let mark = self.mark();
        let mut placeholders = Vec::with_capacity(params.len());
        for value in params {
            match self.allocate(value.clone()) {
                Ok(p) => placeholders.push(p),
                Err(e) => {
                    self.rollback(mark);
                    return Err(e);
                }
            }
        }

        let mut sql = String::with_capacity(query.sql().len());
        let mut last = 0;
        for (range, index) in tokens {
            sql.push_str(&query.sql()[last..range.start]);
            sql.push_str(&placeholders[index].name());
            last = range.end;
        }
        sql.push_str(&query.sql()[last..]);

        tracing::trace!(
            target: "pgclause.placeholder",
            absorbed = placeholders.len(),
            "sub-query"
        );
        Ok(SubQuery { sql, placeholders })
    }

    pub(crate) fn mark(&self) -> usize {
        self.entries.len()
    }

    /// Release everything allocated since `mark`. Only valid when no token
    /// issued after the mark has been handed out to a caller.
    pub(crate) fn rollback(&mut self, mark: usize) {
        self.entries.truncate(mark);
    }

    fn index_of(&self, placeholder: &Placeholder) -> ClauseResult<usize> {
        let foreign = || {
            ClauseError::allocation(format!(
                "placeholder {placeholder} was not issued by this registry"
            ))
        };
        if placeholder.generation() != self.generation || placeholder.prefix() != self.prefix() {
            return Err(foreign());
        }
        let index = placeholder
            .id()
            .checked_sub(self.first_id)
            .map(|i| i as usize)
            .ok_or_else(foreign)?;
        if index >= self.entries.len() {
            return Err(foreign());
        }
        Ok(index)
    }
}

/// A sub-select whose values now live in the enclosing statement's registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubQuery {
    sql: String,
    placeholders: Vec<Placeholder>,
}

impl SubQuery {
    /// The renumbered SQL, without surrounding parentheses.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Placeholders allocated for the sub-query's values.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }
}

impl fmt::Display for SubQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.sql)
    }
}
