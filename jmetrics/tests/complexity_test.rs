//! Tests for cyclomatic complexity calculation.

#![allow(clippy::unwrap_used)]

use jmetrics::complexity::analyze_complexity;

#[test]
fn test_complexity_simple_if_else() {
    let code = r#"
class Greeter {
    String greet(boolean formal) {
        if (formal) {
            return "Good day";
        } else {
            return "Hi";
        }
    }
}
"#;
    let findings = analyze_complexity(code);
    assert_eq!(findings.len(), 1);
    let f = &findings[0];
    assert_eq!(f.name, "Greeter.greet");
    // Base 1 + if 1 = 2 (else adds nothing)
    assert_eq!(f.complexity, 2);
    assert_eq!(f.rank, 'A');
}

#[test]
fn test_complexity_single_for_loop() {
    let code = r"
class Scanner {
    int scan(int[] xs) {
        int total = 0;
        for (int i = 0; i < xs.length; i++) {
            total = total + xs[i];
        }
        return total;
    }
}
";
    let findings = analyze_complexity(code);
    assert_eq!(findings.len(), 1);
    // Base 1 + for 1 = 2
    assert_eq!(findings[0].complexity, 2);
}

#[test]
fn test_complexity_loops_and_nesting() {
    let code = r"
class Worker {
    void churn(int n) {
        for (int i = 0; i < n; i++) {
            while (n > 0) {
                n--;
            }
        }
        do {
            n++;
        } while (n < 10);
    }
}
";
    let findings = analyze_complexity(code);
    assert_eq!(findings.len(), 1);
    // Base 1 + for 1 + while 1 + do 1 = 4
    assert_eq!(findings[0].complexity, 4);
}

#[test]
fn test_complexity_short_circuit_operators() {
    let code = r"
class Guard {
    boolean check(int a, int b, int c) {
        if (a > 0 && b > 0 || c > 0) {
            return true;
        }
        return false;
    }
}
";
    let findings = analyze_complexity(code);
    // Base 1 + if 1 + && 1 + || 1 = 4
    assert_eq!(findings[0].complexity, 4);
}

#[test]
fn test_complexity_switch_counts_non_default_cases() {
    let code = r"
class Dispatcher {
    int route(int kind) {
        switch (kind) {
            case 1:
                return 10;
            case 2:
                return 20;
            default:
                return 0;
        }
    }
}
";
    let findings = analyze_complexity(code);
    // Base 1 + case 1 + case 2 (default excluded) = 3
    assert_eq!(findings[0].complexity, 3);
}

#[test]
fn test_complexity_catch_and_ternary() {
    let code = r"
class Loader {
    int load(String path, int fallback) {
        try {
            return path.length();
        } catch (RuntimeException e) {
            return fallback > 0 ? fallback : 0;
        }
    }
}
";
    let findings = analyze_complexity(code);
    // Base 1 + catch 1 + ternary 1 = 3
    assert_eq!(findings[0].complexity, 3);
}

#[test]
fn test_complexity_never_below_one() {
    let code = r"
class Empty {
    void nothing() {}
}
";
    let findings = analyze_complexity(code);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].complexity, 1);
    assert_eq!(findings[0].rank, 'A');
}

#[test]
fn test_complexity_multiple_methods_and_classes() {
    let code = r"
class First {
    void plain() {}
    void branchy(int x) {
        if (x > 0) {
            x--;
        }
    }
}
class Second {
    void other() {}
}
";
    let findings = analyze_complexity(code);
    assert_eq!(findings.len(), 3);
    let branchy = findings
        .iter()
        .find(|f| f.name == "First.branchy")
        .unwrap();
    assert_eq!(branchy.complexity, 2);
}

#[test]
fn test_unparseable_source_yields_no_findings() {
    let findings = analyze_complexity("class {{{ not java");
    assert!(findings.is_empty());
}
