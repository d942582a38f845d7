use alloc::borrow::Cow;
use alloc::string::String;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sg_utils::hash::HashMap;

// -----------------------------------------------------------------------------
// ClassNameRegistry

/// A table of historical to current type paths.
///
/// Files written before a type was renamed or moved still carry the old
/// path. Registering `old -> new` lets the [`Unmarshaller`] build the
/// current type instead.
///
/// Lookups are exact and never chained: with `a -> b` and `b -> c`
/// registered, `a` resolves to `b`.
///
/// # Examples
///
/// ```
/// use sg_serial::ClassNameRegistry;
///
/// let mut names = ClassNameRegistry::new();
/// names.register("stand::Plot", "survey::Plot");
///
/// assert_eq!(names.resolve("stand::Plot"), "survey::Plot");
/// assert_eq!(names.resolve("stand::PlotList"), "stand::PlotList");
/// assert_eq!(
///     names.resolve_nested("alloc::vec::Vec<stand::Plot>"),
///     "alloc::vec::Vec<survey::Plot>",
/// );
/// ```
///
/// [`Unmarshaller`]: crate::Unmarshaller
#[derive(Debug, Default, Clone)]
pub struct ClassNameRegistry {
    renames: HashMap<String, String>,
}

impl ClassNameRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    ///
    /// With the `auto_register` feature, it starts with every pair submitted
    /// through [`submit_rename!`](crate::submit_rename).
    pub fn global() -> &'static ClassNameRegistryArc {
        static GLOBAL: LazyLock<ClassNameRegistryArc> = LazyLock::new(|| {
            #[cfg_attr(not(feature = "auto_register"), expect(unused_mut))]
            let mut names = ClassNameRegistry::new();
            #[cfg(feature = "auto_register")]
            names.auto_register();
            ClassNameRegistryArc::new(names)
        });
        &GLOBAL
    }

    /// Maps `old` to `new`.
    ///
    /// Registering the same pair again does nothing. Registering `old` with a
    /// different target replaces the previous mapping.
    pub fn register(&mut self, old: impl Into<String>, new: impl Into<String>) {
        let old = old.into();
        let new = new.into();
        match self.renames.get(&old) {
            Some(current) if *current == new => return,
            Some(current) => {
                log::warn!("type path `{old}` already renamed to `{current}`, replaced by `{new}`");
            }
            None => log::debug!("type path `{old}` is now `{new}`"),
        }
        self.renames.insert(old, new);
    }

    /// Registers every pair submitted through [`submit_rename!`].
    ///
    /// Returns the number of pairs found.
    ///
    /// [`submit_rename!`]: crate::submit_rename
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&mut self) -> usize {
        let mut count = 0;
        for entry in crate::__macro_exports::auto_register::iter() {
            self.register(entry.old, entry.new);
            count += 1;
        }
        count
    }

    /// Returns the current name of `name`, or `name` itself if it was never renamed.
    #[inline]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.renames.get(name).map_or(name, String::as_str)
    }

    /// Resolves `name` and every type path nested in its generic arguments.
    ///
    /// The full name is tried first; otherwise each path token between the
    /// delimiters `<>,;()[]&` and spaces is resolved on its own.
    pub fn resolve_nested<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if let Some(current) = self.renames.get(name) {
            return Cow::Owned(current.clone());
        }
        if self.renames.is_empty() || !name.contains(is_delimiter) {
            return Cow::Borrowed(name);
        }

        let mut resolved = String::with_capacity(name.len());
        let mut changed = false;
        let mut token_start = 0;
        for (index, ch) in name.char_indices() {
            if is_delimiter(ch) {
                changed |= self.push_token(&mut resolved, &name[token_start..index]);
                resolved.push(ch);
                token_start = index + ch.len_utf8();
            }
        }
        changed |= self.push_token(&mut resolved, &name[token_start..]);

        if changed {
            Cow::Owned(resolved)
        } else {
            Cow::Borrowed(name)
        }
    }

    // Returns `true` if the token was renamed.
    fn push_token(&self, out: &mut String, token: &str) -> bool {
        match self.renames.get(token) {
            Some(current) if !token.is_empty() => {
                out.push_str(current);
                true
            }
            _ => {
                out.push_str(token);
                false
            }
        }
    }

    #[inline]
    pub fn contains(&self, old: &str) -> bool {
        self.renames.contains_key(old)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Iterates over `(old, new)` pairs in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.renames
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

#[inline]
fn is_delimiter(ch: char) -> bool {
    matches!(ch, '<' | '>' | ',' | ';' | '(' | ')' | '[' | ']' | '&' | ' ')
}

// -----------------------------------------------------------------------------
// ClassNameRegistryArc

/// A shareable [`ClassNameRegistry`].
///
/// `resolve` takes the read lock, `register` the write lock.
#[derive(Clone, Default)]
pub struct ClassNameRegistryArc {
    pub internal: Arc<RwLock<ClassNameRegistry>>,
}

impl ClassNameRegistryArc {
    #[inline]
    pub fn new(registry: ClassNameRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, ClassNameRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, ClassNameRegistry> {
        self.internal.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn register(&self, old: impl Into<String>, new: impl Into<String>) {
        self.write().register(old, new);
    }

    #[inline]
    pub fn resolve(&self, name: &str) -> String {
        String::from(self.read().resolve(name))
    }
}

impl core::fmt::Debug for ClassNameRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&*self.read(), f)
    }
}
