//! Test suite for the Zinc translator
//!
//! Covers the import gate, the five rewrite rules (boundary positives and
//! negatives, the deliberate no-op gaps), rule application order, flag
//! parsing and path resolution.

#[cfg(test)]
mod tests {
    use crate::config::{resolve_input_path, Settings};
    use crate::error::ZincError;
    use crate::rules::{
        apply_rules, rewrite_counted_loop, rewrite_entry_point, rewrite_function_decl,
        rewrite_list_literal, rewrite_string_alias,
    };
    use crate::shim::{zincstd_shim, STD_INCLUDES};
    use crate::toolchain::GccBuildRunner;
    use crate::translate::{translate_source, IMPORT_MARKER};

    fn settings() -> Settings {
        Settings::default()
    }

    //=========================================================================
    // IMPORT GATE
    //=========================================================================

    #[test]
    fn test_rejects_script_without_import() {
        let result = translate_source("main(){\n}", &settings());
        assert!(matches!(result, Err(ZincError::NotAZincFile)));
    }

    #[test]
    fn test_rejects_near_miss_import() {
        let result = translate_source("using zinc;\nmain(){\n}", &settings());
        assert!(matches!(result, Err(ZincError::NotAZincFile)));
    }

    #[test]
    fn test_invalid_source_exit_code_is_two() {
        let err = translate_source("print(1)", &settings()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_import_line_replaced_by_shim() {
        let output = translate_source(IMPORT_MARKER, &settings()).unwrap();
        assert!(output.starts_with(STD_INCLUDES));
        assert!(output.contains("//Standard Zinc functions from zincstd"));
        assert!(!output.contains(IMPORT_MARKER));
    }

    #[test]
    fn test_shim_appears_exactly_once_and_first() {
        let source = "using zincstd;\nmain(){\n}";
        let output = translate_source(source, &settings()).unwrap();
        let banner = "//Standard Zinc functions from zincstd";
        assert_eq!(output.matches(banner).count(), 1);
        assert!(output.find(banner).unwrap() < output.find("int main(){").unwrap());
    }

    #[test]
    fn test_empty_script_yields_includes_only() {
        let output = translate_source("", &settings()).unwrap();
        assert_eq!(output, format!("{}\n", STD_INCLUDES));
    }

    #[test]
    fn test_rules_leave_shim_untouched() {
        let shim = zincstd_shim();
        assert_eq!(apply_rules(&shim), shim);
    }

    //=========================================================================
    // FUNCTION DECLARATION RULE
    //=========================================================================

    #[test]
    fn test_fn_at_line_start() {
        assert_eq!(rewrite_function_decl("fn greet(){"), "void  greet(){");
    }

    #[test]
    fn test_fn_after_boundary_chars() {
        assert_eq!(rewrite_function_decl(";fn f()"), ";void  f()");
        assert_eq!(rewrite_function_decl("}fn f()"), "}void  f()");
        assert_eq!(rewrite_function_decl("{fn f()"), "{void  f()");
        assert_eq!(rewrite_function_decl(" fn f()"), " void  f()");
    }

    #[test]
    fn test_fn_inside_identifier_not_rewritten() {
        assert_eq!(rewrite_function_decl("xfn f()"), "xfn f()");
    }

    #[test]
    fn test_line_without_fn_unchanged() {
        assert_eq!(rewrite_function_decl("println(1);"), "println(1);");
    }

    //=========================================================================
    // ENTRY POINT RULE
    //=========================================================================

    #[test]
    fn test_main_gets_return_type() {
        assert_eq!(rewrite_entry_point("main(){"), "int main(){");
    }

    #[test]
    fn test_main_insertion_keeps_match() {
        // Pure insertion: the matched text itself is not consumed.
        assert_eq!(rewrite_entry_point(" main()"), " int main()");
    }

    #[test]
    fn test_main_inside_identifier_not_rewritten() {
        assert_eq!(rewrite_entry_point("domain()"), "domain()");
        assert_eq!(rewrite_entry_point("mymain(){"), "mymain(){");
    }

    #[test]
    fn test_main_with_params_not_rewritten() {
        assert_eq!(rewrite_entry_point("main(int x)"), "main(int x)");
    }

    //=========================================================================
    // STRING ALIAS RULE
    //=========================================================================

    #[test]
    fn test_string_type_qualified() {
        assert_eq!(rewrite_string_alias("string s;"), "std::string s;");
    }

    #[test]
    fn test_string_only_first_occurrence() {
        assert_eq!(
            rewrite_string_alias("string a; string b;"),
            "std::string a; string b;"
        );
    }

    #[test]
    fn test_already_qualified_string_untouched() {
        // Previous byte is ':', which is not a token boundary.
        assert_eq!(rewrite_string_alias("std::string s;"), "std::string s;");
    }

    #[test]
    fn test_string_inside_identifier_not_rewritten() {
        assert_eq!(rewrite_string_alias("mystring s;"), "mystring s;");
    }

    //=========================================================================
    // COUNTED LOOP RULE
    //=========================================================================

    #[test]
    fn test_loop_literal_bound() {
        // The loop variable is taken untrimmed, space after the comma and all.
        assert_eq!(
            rewrite_counted_loop("loop(5, i){"),
            "for(int  i = 0;  i < 5;  i++){"
        );
    }

    #[test]
    fn test_loop_identifier_bound() {
        assert_eq!(
            rewrite_counted_loop("loop(count, idx)"),
            "for(int  idx = 0;  idx < count;  idx++)"
        );
    }

    #[test]
    fn test_loop_without_comma_is_noop() {
        assert_eq!(rewrite_counted_loop("loop(5 i){"), "loop(5 i){");
    }

    #[test]
    fn test_loop_boundary_check() {
        assert_eq!(rewrite_counted_loop("xloop(5, i)"), "xloop(5, i)");
        assert_eq!(
            rewrite_counted_loop("{loop(5, i)"),
            "{for(int  i = 0;  i < 5;  i++)"
        );
    }

    #[test]
    fn test_loop_missing_close_paren_consumes_rest_of_line() {
        assert_eq!(
            rewrite_counted_loop("loop(5, i{"),
            "for(int  i{ = 0;  i{ < 5;  i{++)"
        );
    }

    #[test]
    fn test_only_first_loop_rewritten() {
        let out = rewrite_counted_loop("loop(2, a) loop(3, b)");
        assert!(out.starts_with("for(int  a = 0;"));
        assert!(out.contains("loop(3, b)"));
    }

    //=========================================================================
    // LIST LITERAL RULE
    //=========================================================================

    #[test]
    fn test_list_basic() {
        assert_eq!(
            rewrite_list_literal("list nums[1, 2, 3]"),
            "std::string nums[3] = {1, 2, 3};"
        );
    }

    #[test]
    fn test_list_replaces_whole_line() {
        // Trailing content on the source line is discarded by design.
        assert_eq!(
            rewrite_list_literal("list nums[1, 2, 3]; // sizes"),
            "std::string nums[3] = {1, 2, 3};"
        );
    }

    #[test]
    fn test_list_comma_without_space_is_one_element() {
        // Elements split on the literal ", " only.
        assert_eq!(rewrite_list_literal("list a[1,2]"), "std::string a[1] = {1,2};");
    }

    #[test]
    fn test_list_without_open_bracket_is_noop() {
        assert_eq!(rewrite_list_literal("list nums 1, 2"), "list nums 1, 2");
    }

    #[test]
    fn test_list_without_close_bracket_is_noop() {
        assert_eq!(rewrite_list_literal("list nums[1, 2"), "list nums[1, 2");
    }

    #[test]
    fn test_list_has_no_boundary_check() {
        // Deliberately looser than the other rules.
        assert_eq!(
            rewrite_list_literal("mylist x[a, b]"),
            "std::string x[2] = {a, b};"
        );
    }

    #[test]
    fn test_list_empty_brackets() {
        assert_eq!(rewrite_list_literal("list x[]"), "std::string x[1] = {};");
    }

    //=========================================================================
    // RULE ORDER
    //=========================================================================

    #[test]
    fn test_rules_run_sequentially_on_same_line() {
        assert_eq!(
            apply_rules("fn make(){string s;}"),
            "void  make(){std::string s;}"
        );
    }

    #[test]
    fn test_string_after_open_paren_stays() {
        // '(' is not in the boundary set, so a parameter type right after it
        // is left as-is.
        assert_eq!(
            apply_rules("fn greet(string name){"),
            "void  greet(string name){"
        );
    }

    #[test]
    fn test_loop_body_string_on_one_line() {
        assert_eq!(
            apply_rules("loop(3, i){string s;}"),
            "for(int  i = 0;  i < 3;  i++){std::string s;}"
        );
    }

    #[test]
    fn test_one_output_line_per_input_line() {
        let source = "using zincstd;\nmain(){\nprintln(1);\n}";
        let output = translate_source(source, &settings()).unwrap();
        assert!(output.contains("int main(){\nprintln(1);\n}\n"));
    }

    //=========================================================================
    // TOOLCHAIN
    //=========================================================================

    #[test]
    fn test_missing_output_binary_run_is_flagged() {
        // No compiled binary in the directory: the spawn fails and the run
        // must not be reported as having happened.
        let dir = tempfile::tempdir().unwrap();
        let runner = GccBuildRunner::in_dir(dir.path());
        assert!(!runner.run_output_binary(&settings()));
    }

    //=========================================================================
    // FLAG PARSING & PATH RESOLUTION
    //=========================================================================

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flags_both_positions_any_order() {
        let (s, _) = Settings::from_args(&args(&["zinc", "f.zc", "-k", "-v"]));
        assert!(s.keep_translation && s.verbose);

        let (s, _) = Settings::from_args(&args(&["zinc", "f.zc", "--verbose", "--keep-translation"]));
        assert!(s.keep_translation && s.verbose);
    }

    #[test]
    fn test_no_flags_defaults() {
        let (s, unrecognized) = Settings::from_args(&args(&["zinc", "f.zc"]));
        assert!(!s.keep_translation && !s.verbose && !s.no_color);
        assert!(unrecognized.is_empty());
    }

    #[test]
    fn test_unknown_flag_ignored_but_reported() {
        let (s, unrecognized) = Settings::from_args(&args(&["zinc", "f.zc", "-x", "-v"]));
        assert!(s.verbose);
        assert!(!s.keep_translation);
        assert_eq!(unrecognized, vec!["-x".to_string()]);
    }

    #[test]
    fn test_flag_outside_window_ignored() {
        // Only argv positions 2 and 3 are inspected.
        let (s, _) = Settings::from_args(&args(&["zinc", "f.zc", "-k", "-v", "--no-color"]));
        assert!(s.keep_translation && s.verbose);
        assert!(!s.no_color);
    }

    #[test]
    fn test_no_color_flag() {
        let (s, _) = Settings::from_args(&args(&["zinc", "f.zc", "--no-color"]));
        assert!(s.no_color);
    }

    #[test]
    fn test_resolve_strips_leading_dot_slash() {
        let resolved = resolve_input_path("./hello.zc");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("hello.zc"));
        assert!(!resolved.to_string_lossy().contains("./hello.zc"));
    }

    #[test]
    fn test_resolve_keeps_absolute_path() {
        let resolved = resolve_input_path("/tmp/hello.zc");
        assert_eq!(resolved, std::path::PathBuf::from("/tmp/hello.zc"));
    }
}
