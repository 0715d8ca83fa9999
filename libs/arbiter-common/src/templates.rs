// Per-language starter-code templates
//
// Shown in the editor before the user has written anything. Each scaffold
// reads the problem input from stdin and prints the answer to stdout, which
// is the contract the judge backend evaluates against.

use crate::types::Language;

/// Default source snippet for a language.
pub fn starter_code(language: Language) -> &'static str {
    match language {
        Language::Javascript => JAVASCRIPT_TEMPLATE,
        Language::Python => PYTHON_TEMPLATE,
        Language::Java => JAVA_TEMPLATE,
        Language::Cpp => CPP_TEMPLATE,
    }
}

const JAVASCRIPT_TEMPLATE: &str = r#"// Read the whole input from stdin
const input = require('fs').readFileSync('/dev/stdin').toString().trim();

function solve(input) {
    // Your code here
}

console.log(solve(input));
"#;

const PYTHON_TEMPLATE: &str = r#"import sys

def solve(data):
    # Your code here
    pass

data = sys.stdin.read().strip()
print(solve(data))
"#;

const JAVA_TEMPLATE: &str = r#"import java.util.*;

public class Solution {
    static String solve(String input) {
        // Your code here
        return "";
    }

    public static void main(String[] args) {
        Scanner sc = new Scanner(System.in);
        StringBuilder sb = new StringBuilder();
        while (sc.hasNextLine()) {
            sb.append(sc.nextLine());
            if (sc.hasNextLine()) sb.append('\n');
        }
        System.out.println(solve(sb.toString().trim()));
    }
}
"#;

const CPP_TEMPLATE: &str = r#"#include <iostream>
#include <sstream>
#include <string>
using namespace std;

string solve(const string& input) {
    // Your code here
    return "";
}

int main() {
    stringstream buffer;
    buffer << cin.rdbuf();
    cout << solve(buffer.str()) << endl;
    return 0;
}
"#;
