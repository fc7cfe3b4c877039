//! Template consistency checking.

use shapeguard_core::{ShapeError, ShapeResult};
use shapeguard_pattern::Bindings;
use std::collections::BTreeMap;

/// A template variable's resolved size and the source that first bound it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved size.
    pub size: usize,
    /// The source that first bound the variable.
    pub source: String,
}

/// Merged template variable sizes for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    map: BTreeMap<String, Resolution>,
}

impl Resolved {
    /// Get the resolved size of a variable.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).map(|r| r.size)
    }

    /// Get the source that first bound a variable.
    pub fn source_of(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(|r| r.source.as_str())
    }

    /// Get the number of resolved variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over resolved sizes by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(k, r)| (k.as_str(), r.size))
    }

    /// Fold one source's bindings in, failing on the first disagreement.
    fn absorb(&mut self, bindings: &Bindings) -> ShapeResult<()> {
        for (name, size) in bindings.iter() {
            match self.map.get(name) {
                Some(existing) if existing.size != size => {
                    return Err(ShapeError::template_conflict(
                        name,
                        existing.size,
                        size,
                        existing.source.as_str(),
                        bindings.source(),
                    ));
                }
                Some(_) => {}
                None => {
                    self.map.insert(
                        name.to_string(),
                        Resolution {
                            size,
                            source: bindings.source().to_string(),
                        },
                    );
                }
            }
        }
        Ok(())
    }
}

/// Consistency checker.
///
/// Stateless: each reconcile starts from an empty merged map, so a second
/// pass over inputs plus return re-validates every input binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Create a new consistency checker.
    pub fn new() -> Self {
        Self
    }

    /// Merge per-source bindings, requiring every variable to agree.
    pub fn reconcile<'a, I>(&self, sources: I) -> ShapeResult<Resolved>
    where
        I: IntoIterator<Item = &'a Bindings>,
    {
        let mut resolved = Resolved::default();
        let mut count = 0usize;

        for bindings in sources {
            resolved.absorb(bindings)?;
            count += 1;
        }

        tracing::trace!(sources = count, vars = resolved.len(), "template bindings reconciled");

        Ok(resolved)
    }
}

/// Reconcile with a fresh checker.
pub fn reconcile<'a, I>(sources: I) -> ShapeResult<Resolved>
where
    I: IntoIterator<Item = &'a Bindings>,
{
    ConsistencyChecker::new().reconcile(sources)
}
