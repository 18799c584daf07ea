//! The zincstd standard-library shim
//!
//! Zinc scripts only get a handful of I/O primitives; they are injected as
//! plain C++ source in place of the `using zincstd;` line. The block below
//! is a fixed content contract: order and spelling matter, since scripts
//! compile against these exact signatures.

/// Includes emitted at the very top of every translation, ahead of the shim.
pub const STD_INCLUDES: &str = "#include <iostream>\n#include <string>\n#include <type_traits>";

/// Build the zincstd shim block that replaces the import marker line.
///
/// Contents, in order:
/// - generic `print(value)` without trailing newline
/// - generic `println(value = default)`, tolerant of a void value
/// - zero-argument `println()` and its `newline()` alias
/// - `input(prompt)` reading one whitespace-delimited token
/// - `getline(prompt)` reading one full line
pub fn zincstd_shim() -> String {
    let mut code = String::new();

    code.push_str("\n//Standard Zinc functions from zincstd\n");
    code.push_str("template <typename T>\nvoid print(const T& input){std::cout << input;}\n");
    code.push_str("template <typename T>\nvoid println(const T& input = T()) { if constexpr (!std::is_void_v<T>) std::cout << input << std::endl; }\n");
    code.push_str("void println(){std::cout << std::endl;}\n");
    code.push_str("void newline(){std::cout << std::endl;}\n");
    code.push_str("std::string input(std::string prompt){std::string Input;std::cout << prompt;std::cin >> Input;return Input;}\n");
    code.push_str("std::string getline(std::string prompt){std::string Input;std::cout << prompt;getline(std::cin, Input);return(Input);}\n");

    code
}
