use crate::pattern::{Candidate, Pattern};
/// Which half of the report a decision is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The tree drawing and the recursion of both walks.
    Listing,
    /// Whether a file's content is emitted.
    Printing,
}
/// The four pattern sequences of one run.
///
/// Built once from the command line and read-only afterwards. Use
/// [`FilterSet::resolve`] to get the parsed form for one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub list_includes: Vec<String>,
    pub list_excludes: Vec<String>,
    pub print_includes: Vec<String>,
    pub print_excludes: Vec<String>,
}
impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }
    /// Includes `pattern` in both scopes.
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.list_includes.push(pattern.clone());
        self.print_includes.push(pattern);
        self
    }
    /// Excludes `pattern` from both scopes.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.list_excludes.push(pattern.clone());
        self.print_excludes.push(pattern);
        self
    }
    pub fn list_include(mut self, pattern: impl Into<String>) -> Self {
        self.list_includes.push(pattern.into());
        self
    }
    pub fn list_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.list_excludes.push(pattern.into());
        self
    }
    pub fn print_include(mut self, pattern: impl Into<String>) -> Self {
        self.print_includes.push(pattern.into());
        self
    }
    pub fn print_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.print_excludes.push(pattern.into());
        self
    }
    /// A copy with `patterns` appended to both exclude sequences.
    pub fn with_ignored(&self, patterns: &[String]) -> Self {
        let mut merged = self.clone();
        merged.list_excludes.extend_from_slice(patterns);
        merged.print_excludes.extend_from_slice(patterns);
        merged
    }
    pub fn includes(&self, scope: Scope) -> &[String] {
        match scope {
            Scope::Listing => &self.list_includes,
            Scope::Printing => &self.print_includes,
        }
    }
    pub fn excludes(&self, scope: Scope) -> &[String] {
        match scope {
            Scope::Listing => &self.list_excludes,
            Scope::Printing => &self.print_excludes,
        }
    }
    /// True when any listing pattern is present.
    pub fn is_listing_active(&self) -> bool {
        !self.list_includes.is_empty() || !self.list_excludes.is_empty()
    }
    pub fn resolve(&self, scope: Scope) -> ScopeFilter {
        ScopeFilter::new(self.includes(scope), self.excludes(scope))
    }
}
/// How a walk treats one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    /// A hidden directory that is still entered because an anchored include
    /// names a path below it.
    Rescued,
    Hidden,
}
impl Visibility {
    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}
/// Parsed include and exclude patterns of one scope.
#[derive(Debug, Clone, Default)]
pub struct ScopeFilter {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
    allow_list: bool,
}
impl ScopeFilter {
    pub fn new<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Self {
        let includes: Vec<Pattern> = includes.iter().map(|p| Pattern::parse(p.as_ref())).collect();
        let excludes: Vec<Pattern> = excludes.iter().map(|p| Pattern::parse(p.as_ref())).collect();
        let allow_list = establishes_allow_list(&includes, &excludes);
        Self {
            includes,
            excludes,
            allow_list,
        }
    }
    /// Whether anything not explicitly included is hidden.
    pub fn is_allow_list(&self) -> bool {
        self.allow_list
    }
    /// The four-step decision on the path itself.
    pub fn should_show(&self, candidate: &Candidate) -> bool {
        verdict(candidate, &self.includes, &self.excludes).unwrap_or(!self.allow_list)
    }
    /// The decision a walk acts on: like [`ScopeFilter::should_show`], but a
    /// path no pattern names inherits the verdict of its nearest named
    /// ancestor, and hidden directories an anchored include reaches into are
    /// rescued.
    pub fn visibility(&self, candidate: &Candidate, is_dir: bool) -> Visibility {
        let shown = match verdict(candidate, &self.includes, &self.excludes) {
            Some(shown) => shown,
            None => self.inherited_verdict(candidate).unwrap_or(!self.allow_list),
        };
        if shown {
            Visibility::Shown
        } else if is_dir
            && self
                .includes
                .iter()
                .any(|pattern| pattern.reaches_below(candidate.relative()))
        {
            Visibility::Rescued
        } else {
            Visibility::Hidden
        }
    }
    /// True when the nearest named ancestor of `candidate` is excluded and
    /// `candidate` itself is not included.
    pub fn excluded_by_ancestor(&self, candidate: &Candidate) -> bool {
        if self.includes.iter().any(|pattern| pattern.matches(candidate)) {
            return false;
        }
        self.inherited_verdict(candidate) == Some(false)
    }
    fn inherited_verdict(&self, candidate: &Candidate) -> Option<bool> {
        candidate
            .ancestors()
            .find_map(|ancestor| verdict(&ancestor, &self.includes, &self.excludes))
    }
}
/// `Some(true)` when an include matches, else `Some(false)` when an exclude
/// matches, else `None`. Every include is tried before any exclude.
fn verdict(candidate: &Candidate, includes: &[Pattern], excludes: &[Pattern]) -> Option<bool> {
    if includes.iter().any(|pattern| pattern.matches(candidate)) {
        Some(true)
    } else if excludes.iter().any(|pattern| pattern.matches(candidate)) {
        Some(false)
    } else {
        None
    }
}
/// An include whose literal path lies under an excluded path is an exception
/// to that exclude. Only includes that are not exceptions switch a scope into
/// allow-list mode.
fn establishes_allow_list(includes: &[Pattern], excludes: &[Pattern]) -> bool {
    includes.iter().any(|include| !is_exception(include, excludes))
}
fn is_exception(include: &Pattern, excludes: &[Pattern]) -> bool {
    let Some(path) = include.anchored_path() else {
        return false;
    };
    let target = Candidate::new(path);
    std::iter::once(target.clone())
        .chain(target.ancestors())
        .any(|candidate| excludes.iter().any(|pattern| pattern.matches(&candidate)))
}
/// Decides whether `candidate` is shown in a scope with the given patterns.
///
/// 1. any include matches: shown (include always wins);
/// 2. any exclude matches: hidden;
/// 3. the scope is in allow-list mode: hidden;
/// 4. otherwise shown.
///
/// Step 3 is exception-aware: an include whose literal path lies under an
/// excluded path only carves an exception out of that exclude and does not
/// turn the scope into an allow-list.
pub fn should_show(candidate: &Candidate, includes: &[Pattern], excludes: &[Pattern]) -> bool {
    verdict(candidate, includes, excludes)
        .unwrap_or_else(|| !establishes_allow_list(includes, excludes))
}
