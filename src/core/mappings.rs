// src/core/mappings.rs
//! The built-in pt-BR dialect.
//!
//! Order matters only in that it is the order passes are applied in; the two
//! tables are disjoint so any order gives the same output.

/// Grammar keywords: (dialect, host).
pub const STRUCTURAL_WORDS: &[(&str, &str)] = &[
    // Loops
    ("para", "for"),
    ("em", "in"),
    ("enquanto", "while"),
    // Conditionals
    ("se", "if"),
    ("senao", "else"),
    ("senao_se", "elif"),
    // Logical operators
    ("e", "and"),
    ("ou", "or"),
    ("nao", "not"),
    // Literals
    ("verdadeiro", "True"),
    ("falso", "False"),
    ("nulo", "None"),
    // Loop control
    ("quebra", "break"),
    ("continua", "continue"),
    // Declarations
    ("retorna", "return"),
    ("funcao", "def"),
    ("classe", "class"),
];

/// Built-in callables: (dialect, host).
pub const CALLABLE_WORDS: &[(&str, &str)] = &[
    // I/O
    ("imprimir", "print"),
    ("entrada", "input"),
    // Collections and iteration
    ("intervalo", "range"),
    ("lista", "list"),
    ("tupla", "tuple"),
    ("conjunto", "set"),
    ("dicionario", "dict"),
    ("enumerar", "enumerate"),
    ("compacta", "zip"),
    ("comprimento", "len"),
    // Conversions
    ("inteiro", "int"),
    ("flutuante", "float"),
    ("texto", "str"),
    ("booleano", "bool"),
    // Aggregation and sorting
    ("soma", "sum"),
    ("minimo", "min"),
    ("maximo", "max"),
    ("classifica", "sorted"),
    // Introspection
    ("tipo", "type"),
    ("eh_instancia", "isinstance"),
    // Functional
    ("mapa", "map"),
    ("filtro", "filter"),
];
