use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ptbr_core::{translate, Dictionary, TemplateScope, TranslateOptions, Translator};
use std::process::Command;

#[test]
fn keywords() {
    let cases = [
        ("para i em intervalo(5):", "for i in range(5):"),
        ("para item em lista:", "for item in lista:"),
        ("se x > 0:\n    y = 1\nsenao:\n    y = 2", "if x > 0:\n    y = 1\nelse:\n    y = 2"),
        ("se x > 0:\n    a\nsenao_se x == 0:\n    b", "if x > 0:\n    a\nelif x == 0:\n    b"),
        ("enquanto condicao:", "while condicao:"),
        ("se x == 0 ou y == 0:", "if x == 0 or y == 0:"),
        ("se nao condicao:", "if not condicao:"),
        ("x = verdadeiro", "x = True"),
        ("x = falso", "x = False"),
        ("x = nulo", "x = None"),
        ("    quebra", "    break"),
        ("    continua", "    continue"),
        ("    retorna 42", "    return 42"),
        ("funcao hello():", "def hello():"),
        ("classe MinhaClasse:", "class MinhaClasse:"),
    ];
    for (input, expected) in cases {
        assert_eq!(translate(input), expected, "input: {input:?}");
    }
}

#[test]
fn builtins() {
    let cases = [
        (r#"imprimir("Olá")"#, r#"print("Olá")"#),
        (r#"x = entrada("Digite: ")"#, r#"x = input("Digite: ")"#),
        ("x = comprimento(lista)", "x = len(lista)"),
        ("x = lista([1, 2, 3])", "x = list([1, 2, 3])"),
        (r#"x = inteiro("42")"#, r#"x = int("42")"#),
        ("x = texto(42)", "x = str(42)"),
        (r#"x = flutuante("3.14")"#, r#"x = float("3.14")"#),
        ("x = booleano(1)", "x = bool(1)"),
        ("x = tupla([1, 2])", "x = tuple([1, 2])"),
        ("x = conjunto([1, 2])", "x = set([1, 2])"),
        ("x = dicionario(a=1)", "x = dict(a=1)"),
        ("enumerar(lista)", "enumerate(lista)"),
        ("compacta(l1, l2)", "zip(l1, l2)"),
        ("x = tipo(42)", "x = type(42)"),
        ("x = eh_instancia(42, int)", "x = isinstance(42, int)"),
        ("x = mapa(funcao, lista)", "x = map(def, lista)"),
        ("x = filtro(funcao, lista)", "x = filter(def, lista)"),
        ("x = classifica(lista)", "x = sorted(lista)"),
        ("x = soma([1, 2, 3])", "x = sum([1, 2, 3])"),
        ("x = minimo([3, 1, 2])", "x = min([3, 1, 2])"),
        ("x = maximo([3, 1, 2])", "x = max([3, 1, 2])"),
    ];
    for (input, expected) in cases {
        assert_eq!(translate(input), expected, "input: {input:?}");
    }
}

#[test]
fn both_classes_in_one_call() {
    assert_eq!(
        translate("para i em intervalo(5):\n    imprimir(i)"),
        "for i in range(5):\n    print(i)"
    );
    assert_eq!(
        translate("se x > 0 e y < 10 ou z == 5:"),
        "if x > 0 and y < 10 or z == 5:"
    );
    assert_eq!(
        translate("para i em intervalo(5):\n    se i > 2:\n        imprimir(i)"),
        "for i in range(5):\n    if i > 2:\n        print(i)"
    );
}

#[test]
fn strings_are_protected() {
    assert_eq!(translate(r#"imprimir("para sempre")"#), r#"print("para sempre")"#);
    assert_eq!(translate("imprimir('para sempre')"), "print('para sempre')");
    assert_eq!(
        translate(r#"imprimir("para") e imprimir("se")"#),
        r#"print("para") and print("se")"#
    );
    assert_eq!(
        translate(r#"imprimir("She said \"para\"")"#),
        r#"print("She said \"para\"")"#
    );
    assert_eq!(translate(r#"x = "imprimir(1)""#), r#"x = "imprimir(1)""#);
}

#[test]
fn comments_are_protected() {
    assert_eq!(translate("# para sempre\nx = 1"), "# para sempre\nx = 1");
    assert_eq!(
        translate("# imprimir deve fazer algo\nx = 1"),
        "# imprimir deve fazer algo\nx = 1"
    );
    assert_eq!(
        translate("x = 1  # para teste\nimprimir(x)"),
        "x = 1  # para teste\nprint(x)"
    );
    assert_eq!(
        translate("x = 1  # imprimir(x) nao\nse x:"),
        "x = 1  # imprimir(x) nao\nif x:"
    );
}

#[test]
fn template_strings() {
    assert_eq!(
        translate(r#"imprimir(f"Total: {soma([1,2,3])}")"#),
        r#"print(f"Total: {sum([1,2,3])}")"#
    );
    assert_eq!(
        translate(r#"imprimir(f"Min: {minimo(lst)}, Max: {maximo(lst)}")"#),
        r#"print(f"Min: {min(lst)}, Max: {max(lst)}")"#
    );
    // structural words are literal text even in f-strings
    assert_eq!(translate(r#"x = f"para sempre""#), r#"x = f"para sempre""#);
    // same shape, no f prefix
    assert_eq!(
        translate(r#"imprimir("Total: {soma([1,2,3])}")"#),
        r#"print("Total: {soma([1,2,3])}")"#
    );
}

#[test]
fn strict_templates_only_touch_holes() {
    let strict = TranslateOptions { template_scope: TemplateScope::HolesOnly, ..Default::default() };
    let translator = Translator::with_options(Dictionary::builtin(), strict);
    assert_eq!(
        translator.translate(r#"imprimir(f"soma(x) = {soma(x)}")"#),
        r#"print(f"soma(x) = {sum(x)}")"#
    );
    assert_eq!(
        translate(r#"imprimir(f"soma(x) = {soma(x)}")"#),
        r#"print(f"sum(x) = {sum(x)}")"#
    );
}

#[test]
fn identifiers_are_not_split() {
    assert_eq!(translate("para_index = 5"), "para_index = 5");
    assert_eq!(translate("meu_para = 5"), "meu_para = 5");
    assert_eq!(translate("minha_imprimir(x)"), "minha_imprimir(x)");
    assert_eq!(translate("x = imprimir"), "x = imprimir");
    assert_eq!(translate("senao_se_algo = 1"), "senao_se_algo = 1");
    assert_eq!(translate("paraíso = 1"), "paraíso = 1");
}

#[test]
fn edge_inputs() {
    assert_eq!(translate(""), "");
    assert_eq!(translate("   \n\t  \n"), "   \n\t  \n");
    assert_eq!(translate("x = 1\ny = 2\nz = x + y"), "x = 1\ny = 2\nz = x + y");
    assert_eq!(
        translate(r#"imprimir("Olá, Mundo! @#$%")"#),
        r#"print("Olá, Mundo! @#$%")"#
    );
    assert_eq!(
        translate("x = \"José\"\nse verdadeiro:\n    imprimir(x)"),
        "x = \"José\"\nif True:\n    print(x)"
    );
    // unterminated string and comment
    assert_eq!(translate("imprimir(\"para"), "print(\"para");
    assert_eq!(translate("se x: # para"), "if x: # para");
}

#[test]
fn long_line() {
    let padding = "x".repeat(5000);
    let source = format!("para i em intervalo(1000): {padding}");
    assert_eq!(translate(&source), format!("for i in range(1000): {padding}"));
}

#[test]
fn custom_dictionary() {
    let dict = Dictionary::from_json(
        r#"{"structural": {"si": "if", "sino": "else"}, "callable": {"mostrar": "print"}}"#,
    )
    .unwrap();
    let translator = Translator::new(&dict);
    assert_eq!(
        translator.translate("si x:\n    mostrar('si')\nsino:\n    pass"),
        "if x:\n    print('si')\nelse:\n    pass"
    );
    // pt-BR words mean nothing to this dictionary
    assert_eq!(translator.translate("se x:"), "se x:");
}

#[test]
fn conditional_runs_in_python() {
    let source = "se verdadeiro:\n    resultado = \"ok\"\nsenao:\n    resultado = \"not ok\"";
    let translated = translate(source);
    assert_eq!(
        translated,
        "if True:\n    resultado = \"ok\"\nelse:\n    resultado = \"not ok\""
    );

    let Ok(output) = Command::new("python3")
        .arg("-c")
        .arg(format!("{translated}\nprint(resultado)"))
        .output()
    else {
        eprintln!("python3 not available, skipping execution");
        return;
    };
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ok");
}

fn arbitrary_source() -> impl Strategy<Value = String> {
    let pieces = vec![
        "para", "se", "senao", "e", "imprimir(", "soma", "(", ")", "\"", "'", "\\", "#", "\n",
        "f\"", "{", "}", " ", "x", "_", "ção",
    ];
    prop::collection::vec(prop::sample::select(pieces), 0..40)
        .prop_map(|parts| parts.concat())
}

fn clean_source() -> impl Strategy<Value = String> {
    let pieces = vec![
        "x", "y", "for", "in", "print(", ")", "\"", "'", "#", "\n", " ", "=", "1", "_", "f\"",
        "{", "}", "parar", "sex", "é",
    ];
    prop::collection::vec(prop::sample::select(pieces), 0..40)
        .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn translate_is_total(source in arbitrary_source()) {
        let _ = translate(&source);
    }

    #[test]
    fn clean_input_is_unchanged(source in clean_source()) {
        prop_assert_eq!(translate(&source), source);
    }
}
