//! Built-in code samples, one per supported language label.

/// A built-in code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub language: &'static str,
    pub code: &'static str,
}

impl Sample {
    /// Label with its first letter upper-cased.
    pub fn display_name(&self) -> String {
        display_name(self.language)
    }
}

/// Language shown when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Capitalize the first letter of a language label (`rust` -> `Rust`).
pub fn display_name(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Find a sample by language label (case-insensitive).
pub fn find(language: &str) -> Option<&'static Sample> {
    let language = language.trim();
    SAMPLES
        .iter()
        .find(|s| s.language.eq_ignore_ascii_case(language))
}

/// All samples in display order.
pub fn all() -> &'static [Sample] {
    SAMPLES
}

/// Guess a language label from a file extension.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let language = match extension.to_ascii_lowercase().as_str() {
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "py" => "python",
        "java" => "java",
        "c" | "cc" | "cpp" | "cxx" | "h" | "hpp" => "cpp",
        "cs" => "csharp",
        "php" => "php",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "ts" | "tsx" => "typescript",
        "html" | "htm" => "html",
        "css" => "css",
        "sql" => "sql",
        "sh" | "bash" | "zsh" => "bash",
        "txt" | "md" => "plaintext",
        _ => return None,
    };
    Some(language)
}

/// Supported language labels.
pub fn languages() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|s| s.language)
}

static SAMPLES: &[Sample] = &[
    Sample {
        language: "javascript",
        code: r#"// Fibonacci sequence in JavaScript
function fibonacci(n) {
    if (n <= 1) return n;
    return fibonacci(n - 1) + fibonacci(n - 2);
}

console.log(fibonacci(10));"#,
    },
    Sample {
        language: "python",
        code: r#"# Fibonacci sequence in Python
def fibonacci(n):
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)

print(fibonacci(10))"#,
    },
    Sample {
        language: "java",
        code: r#"// Fibonacci sequence in Java
public class Fibonacci {
    public static int fibonacci(int n) {
        if (n <= 1) return n;
        return fibonacci(n - 1) + fibonacci(n - 2);
    }

    public static void main(String[] args) {
        System.out.println(fibonacci(10));
    }
}"#,
    },
    Sample {
        language: "cpp",
        code: r#"// Fibonacci sequence in C++
#include <iostream>
using namespace std;

int fibonacci(int n) {
    if (n <= 1) return n;
    return fibonacci(n - 1) + fibonacci(n - 2);
}

int main() {
    cout << fibonacci(10) << endl;
    return 0;
}"#,
    },
    Sample {
        language: "csharp",
        code: r#"// Fibonacci sequence in C#
using System;

class Program {
    static int Fibonacci(int n) {
        if (n <= 1) return n;
        return Fibonacci(n - 1) + Fibonacci(n - 2);
    }

    static void Main() {
        Console.WriteLine(Fibonacci(10));
    }
}"#,
    },
    Sample {
        language: "php",
        code: r#"<?php
// Fibonacci sequence in PHP
function fibonacci($n) {
    if ($n <= 1) return $n;
    return fibonacci($n - 1) + fibonacci($n - 2);
}

echo fibonacci(10);
?>"#,
    },
    Sample {
        language: "ruby",
        code: r#"# Fibonacci sequence in Ruby
def fibonacci(n)
    return n if n <= 1
    fibonacci(n - 1) + fibonacci(n - 2)
end

puts fibonacci(10)"#,
    },
    Sample {
        language: "go",
        code: r#"// Fibonacci sequence in Go
package main

import "fmt"

func fibonacci(n int) int {
    if n <= 1 {
        return n
    }
    return fibonacci(n-1) + fibonacci(n-2)
}

func main() {
    fmt.Println(fibonacci(10))
}"#,
    },
    Sample {
        language: "rust",
        code: r#"// Fibonacci sequence in Rust
fn fibonacci(n: u32) -> u32 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

fn main() {
    println!("{}", fibonacci(10));
}"#,
    },
    Sample {
        language: "typescript",
        code: r#"// Fibonacci sequence in TypeScript
function fibonacci(n: number): number {
    if (n <= 1) return n;
    return fibonacci(n - 1) + fibonacci(n - 2);
}

console.log(fibonacci(10));"#,
    },
    Sample {
        language: "html",
        code: r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Web Page</title>
</head>
<body>
    <h1>Hello, World!</h1>
    <p>This is a sample HTML page.</p>
</body>
</html>"#,
    },
    Sample {
        language: "css",
        code: r#"/* Modern CSS styling */
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem;
}

.card {
    background: #ffffff;
    border-radius: 8px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease;
}

.card:hover {
    transform: translateY(-4px);
}"#,
    },
    Sample {
        language: "sql",
        code: r#"-- Sample SQL queries
SELECT users.name, orders.total
FROM users
INNER JOIN orders ON users.id = orders.user_id
WHERE orders.status = 'completed'
  AND orders.total > 100
ORDER BY orders.total DESC
LIMIT 10;"#,
    },
    Sample {
        language: "bash",
        code: r#"#!/bin/bash
# Fibonacci sequence in Bash

fibonacci() {
    if [ $1 -le 1 ]; then
        echo $1
    else
        echo $(( $(fibonacci $(($1-1))) + $(fibonacci $(($1-2))) ))
    fi
}

fibonacci 10"#,
    },
    Sample {
        language: "plaintext",
        code: r#"This is plain text.
No syntax highlighting will be applied.

You can use this mode for:
- General notes
- Documentation
- Plain text output
- Any non-code content"#,
    },
];
