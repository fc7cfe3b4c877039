//! Call arguments, supplied by position or by name.

/// The arguments of one call.
#[derive(Debug, Clone)]
pub struct Args<T> {
    positional: Vec<T>,
    keywords: Vec<(String, T)>,
}

impl<T> Default for Args<T> {
    fn default() -> Self {
        Self {
            positional: Vec::new(),
            keywords: Vec::new(),
        }
    }
}

impl<T> Args<T> {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: T) -> Self {
        self.positional.push(value);
        self
    }

    /// Add a named argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: T) -> Self {
        self.keywords.push((name.into(), value));
        self
    }

    /// Get a positional argument.
    pub fn positional(&self, index: usize) -> Option<&T> {
        self.positional.get(index)
    }

    /// Get a named argument.
    pub fn keyword(&self, name: &str) -> Option<&T> {
        self.keywords
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of positional arguments.
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Names of the named arguments, in the order given.
    pub fn keyword_names(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|(n, _)| n.as_str())
    }
}

impl<T> From<Vec<T>> for Args<T> {
    fn from(positional: Vec<T>) -> Self {
        Self {
            positional,
            keywords: Vec::new(),
        }
    }
}

/// Arguments as seen by a wrapped function: the call's values plus the
/// function's declared parameter names.
#[derive(Debug)]
pub struct CallArgs<'a, T> {
    params: &'a [String],
    args: &'a Args<T>,
}

impl<'a, T> Clone for CallArgs<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for CallArgs<'a, T> {}

impl<'a, T> CallArgs<'a, T> {
    pub(crate) fn new(params: &'a [String], args: &'a Args<T>) -> Self {
        Self { params, args }
    }

    /// Resolve a parameter: by name first, then by its declared position.
    pub fn get(&self, name: &str) -> Option<&'a T> {
        if let Some(value) = self.args.keyword(name) {
            return Some(value);
        }
        let index = self.params.iter().position(|p| p == name)?;
        self.args.positional(index)
    }

    /// Resolve a parameter, falling back to a default when it was not supplied.
    pub fn get_or<'b>(&self, name: &str, default: &'b T) -> &'b T
    where
        'a: 'b,
    {
        self.get(name).unwrap_or(default)
    }

    /// Get a positional argument.
    pub fn positional(&self, index: usize) -> Option<&'a T> {
        self.args.positional(index)
    }

    /// Get a named argument.
    pub fn keyword(&self, name: &str) -> Option<&'a T> {
        self.args.keyword(name)
    }

    /// The declared parameter names.
    pub fn params(&self) -> &'a [String] {
        self.params
    }

    /// The raw arguments.
    pub fn args(&self) -> &'a Args<T> {
        self.args
    }
}
