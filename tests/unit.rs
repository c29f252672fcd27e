use catlr::config::ToolConfig;
use catlr::ignore_file::parse_ignore_patterns;
use catlr::{
    Candidate, ExternalCommand, FilePrinter, FilterSet, Pattern, Scope, ScopeFilter, ToolProbe,
    Toolchain, Visibility, matches, should_show,
};

const NONE: &[&str] = &[];

fn shows(includes: &[&str], excludes: &[&str], path: &str) -> bool {
    ScopeFilter::new(includes, excludes).should_show(&Candidate::new(path))
}

#[test]
fn test_contains_pattern_matches_anywhere_in_relative_path() {
    assert!(matches("*build*", "src/build/out", "out"));
    assert!(matches("*build*", "builder.log", "builder.log"));
    assert!(!matches("*build*", "src/main.rs", "main.rs"));
}

#[test]
fn test_suffix_and_prefix_patterns() {
    assert!(matches("*.rs", "src/lib.rs", "lib.rs"));
    assert!(!matches("*.rs", "src/lib.rsx", "lib.rsx"));
    assert!(matches("src*", "src/lib.rs", "lib.rs"));
    assert!(matches("src*", "srcfoo", "srcfoo"));
    assert!(!matches("src*", "lib/src", "src"));
}

#[test]
fn test_other_wildcard_placements_strip_stars() {
    assert_eq!(Pattern::parse("a*b"), Pattern::Contains("ab".into()));
    assert_eq!(Pattern::parse("*a*b*"), Pattern::Contains("ab".into()));
    assert!(matches("a*b", "xaby", "xaby"));
    assert!(!matches("a*b", "a-b", "a-b"));
}

#[test]
fn test_bare_wildcard_matches_everything() {
    assert_eq!(Pattern::parse("*"), Pattern::Universal);
    assert_eq!(Pattern::parse("**"), Pattern::Universal);
    assert!(matches("*", "deep/nested/file.txt", "file.txt"));
}

#[test]
fn test_directory_pattern_matches_itself_and_descendants_only() {
    assert!(matches("build/", "build", "build"));
    assert!(matches("build/", "build/main.js", "main.js"));
    assert!(matches("build/", "build/sub/deep.o", "deep.o"));
    assert!(!matches("build/", "build2/file", "file"));
    assert!(!matches("build/", "src/build", "build"));
}

#[test]
fn test_name_pattern_compares_base_name_case_sensitively() {
    assert!(matches("modules", "lib/modules", "modules"));
    assert!(!matches("modules", "node_modules", "node_modules"));
    assert!(!matches("README.md", "Readme.md", "Readme.md"));
}

#[test]
fn test_path_pattern_requires_full_relative_path() {
    assert!(matches("src/main.rs", "src/main.rs", "main.rs"));
    assert!(!matches("src/main.rs", "other/src/main.rs", "main.rs"));
}

#[test]
fn test_empty_pattern_matches_nothing() {
    assert!(!matches("", "a", "a"));
    assert!(!matches("", "dir/a", "a"));
}

#[test]
fn test_candidate_parts_and_ancestors() {
    let candidate = Candidate::new("a/b/c.txt");
    assert_eq!(candidate.name(), "c.txt");
    let ancestors: Vec<String> = candidate
        .ancestors()
        .map(|a| a.relative().to_string())
        .collect();
    assert_eq!(ancestors, vec!["a/b", "a"]);
    assert_eq!(Candidate::root().child("x").relative(), "x");
    assert_eq!(candidate.child("d").relative(), "a/b/c.txt/d");
}

#[test]
fn test_reaches_below() {
    assert!(Pattern::parse("build/main.js").reaches_below("build"));
    assert!(!Pattern::parse("build/main.js").reaches_below("src"));
    assert!(Pattern::parse("a/b/").reaches_below("a"));
    assert!(Pattern::parse("docs/api*").reaches_below("docs"));
    assert!(!Pattern::parse("main.js").reaches_below("anything"));
    assert!(!Pattern::parse("*.js").reaches_below("anything"));
    assert!(!Pattern::parse("*").reaches_below("anything"));
}

#[test]
fn test_unanchored_include_does_not_rescue_excluded_directory() {
    let filter = ScopeFilter::new(&["README.md"], &["node_modules/"]);
    assert_eq!(
        filter.visibility(&Candidate::new("node_modules"), true),
        Visibility::Hidden
    );
    let filter = ScopeFilter::new(&["*.rs"], NONE);
    assert_eq!(
        filter.visibility(&Candidate::new("src"), true),
        Visibility::Hidden
    );
}

#[test]
fn test_include_always_wins_over_exclude() {
    assert!(shows(&["keep.txt"], &["*.txt"], "keep.txt"));
    assert!(!shows(&["keep.txt"], &["*.txt"], "other.txt"));
    assert!(shows(&["*"], &["*"], "anything"));
}

#[test]
fn test_non_empty_includes_switch_to_allow_list() {
    let filter = ScopeFilter::new(&["*.rs"], NONE);
    assert!(filter.is_allow_list());
    assert!(filter.should_show(&Candidate::new("src/lib.rs")));
    assert!(!filter.should_show(&Candidate::new("notes.md")));
}

#[test]
fn test_empty_includes_is_deny_list() {
    assert!(shows(NONE, NONE, "anything"));
    assert!(shows(NONE, &["target/"], "src/lib.rs"));
    assert!(!shows(NONE, &["target/"], "target/debug/app"));
}

#[test]
fn test_include_inside_excluded_directory_is_an_exception() {
    let filter = ScopeFilter::new(&["build/main.js"], &["build/"]);
    assert!(!filter.is_allow_list());
    assert!(filter.should_show(&Candidate::new("src/main.cpp")));
    assert!(filter.should_show(&Candidate::new("build/main.js")));
    assert!(!filter.should_show(&Candidate::new("build/out.o")));
}

#[test]
fn test_free_should_show_matches_scope_filter() {
    let includes = vec![Pattern::parse("build/main.js")];
    let excludes = vec![Pattern::parse("build/")];
    assert!(should_show(&Candidate::new("src/a.c"), &includes, &excludes));
    assert!(!should_show(&Candidate::new("build/a.o"), &includes, &excludes));
    let includes = vec![Pattern::parse("*.c")];
    assert!(!should_show(&Candidate::new("readme"), &includes, &[]));
}

#[test]
fn test_excluded_directory_with_included_descendant_is_rescued() {
    let filter = ScopeFilter::new(&["build/main.js"], &["build/", ".git/"]);
    assert_eq!(
        filter.visibility(&Candidate::new("build"), true),
        Visibility::Rescued
    );
    assert_eq!(
        filter.visibility(&Candidate::new(".git"), true),
        Visibility::Hidden
    );
    assert_eq!(
        filter.visibility(&Candidate::new("build/main.js"), false),
        Visibility::Shown
    );
}

#[test]
fn test_visibility_inherits_nearest_named_ancestor() {
    let filter = ScopeFilter::new(NONE, &["vendor"]);
    let nested = Candidate::new("vendor/lib.rs");
    assert!(filter.should_show(&nested));
    assert_eq!(filter.visibility(&nested, false), Visibility::Hidden);
    assert!(filter.excluded_by_ancestor(&nested));

    let filter = ScopeFilter::new(&["src"], NONE);
    assert_eq!(
        filter.visibility(&Candidate::new("src/main.rs"), false),
        Visibility::Shown
    );
    assert_eq!(
        filter.visibility(&Candidate::new("lib/x.rs"), false),
        Visibility::Hidden
    );
}

#[test]
fn test_basename_exclude_with_nested_include() {
    let filter = ScopeFilter::new(&["build/main.js"], &["build"]);
    assert!(!filter.is_allow_list());
    assert_eq!(
        filter.visibility(&Candidate::new("build"), true),
        Visibility::Rescued
    );
    assert_eq!(
        filter.visibility(&Candidate::new("build/out.o"), false),
        Visibility::Hidden
    );
    assert!(!filter.excluded_by_ancestor(&Candidate::new("build/main.js")));
}

#[test]
fn test_filter_set_builder_scopes() {
    let filters = FilterSet::new()
        .exclude("target/")
        .include("target/keep")
        .list_exclude(".git/")
        .print_include("*.rs");
    assert_eq!(filters.includes(Scope::Listing), ["target/keep"]);
    assert_eq!(filters.includes(Scope::Printing), ["target/keep", "*.rs"]);
    assert_eq!(filters.excludes(Scope::Listing), ["target/", ".git/"]);
    assert_eq!(filters.excludes(Scope::Printing), ["target/"]);
    assert!(filters.is_listing_active());
    assert!(!FilterSet::new().print_exclude("x").is_listing_active());

    let merged = FilterSet::new().with_ignored(&["secret".to_string()]);
    assert_eq!(merged.list_excludes, ["secret"]);
    assert_eq!(merged.print_excludes, ["secret"]);
}

#[test]
fn test_tool_config_parsing() {
    let config = ToolConfig::parse(
        "# tools\n\ntreePrintCommand = lsd --tree\nfilePrintCommand =\nunknown=1\nnot a pair\n",
    );
    assert_eq!(config.tree_command, "lsd --tree");
    assert_eq!(config.file_command, "bat");
    assert_eq!(ToolConfig::parse(""), ToolConfig::default());
}

#[test]
fn test_ignore_file_parsing() {
    let patterns = parse_ignore_patterns("# generated\n\n  target/  \n*.log\n");
    assert_eq!(patterns, vec!["target/", "*.log"]);
}

struct FakeProbe(&'static [&'static str]);

impl ToolProbe for FakeProbe {
    fn is_available(&self, program: &str) -> bool {
        self.0.contains(&program)
    }
}

#[test]
fn test_toolchain_resolution_fallbacks() {
    let config = ToolConfig::default();

    let all = Toolchain::resolve(&config, &FakeProbe(&["tree", "bat", "cat"]), false);
    assert_eq!(all.tree.as_ref().map(|c| c.program()), Some("tree"));
    match &all.printer {
        FilePrinter::External(command) => {
            assert_eq!(command.program(), "bat");
            assert_eq!(command.args(), ["--paging=never", "--style=full"]);
        }
        FilePrinter::Native => panic!("expected bat"),
    }
    assert!(all.tree_command(true).is_none());
    assert!(all.tree_command(false).is_some());

    let cat_only = Toolchain::resolve(&config, &FakeProbe(&["cat"]), false);
    assert!(cat_only.tree.is_none());
    assert_eq!(
        cat_only.printer,
        FilePrinter::External(ExternalCommand::parse("cat").unwrap())
    );

    let nothing = Toolchain::resolve(&config, &FakeProbe(&[]), true);
    assert_eq!(nothing, Toolchain::native());
}

#[test]
fn test_external_command_parsing() {
    let command = ExternalCommand::parse("lsd --tree --depth 2").unwrap();
    assert_eq!(command.program(), "lsd");
    assert_eq!(command.args(), ["--tree", "--depth", "2"]);
    assert!(ExternalCommand::parse("   ").is_none());
}
