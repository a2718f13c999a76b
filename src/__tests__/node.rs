use super::hash_of;
use crate::{make_parser, Error};

#[test]
pub fn infix_serialization_test() {
    let parser = make_parser::<f64>();

    let node = parser.from_infix("abs(3)+4*2/(1-5)^2^3", &[]).unwrap();
    assert_eq!(node.infix(), "abs(3)+4*2/(1-5)^2^3");
    assert_eq!(node.postfix(), "3 abs 4 2 * 1 5 - 2 3 ^ ^ / +");
    assert_eq!(node.eval(&[]).unwrap(), 3.0001220703125);

    assert_eq!(parser.parse("1+2*3").unwrap().infix(), "1+2*3");
    assert_eq!(parser.parse("(1+2)*3").unwrap().infix(), "(1+2)*3");
    assert_eq!(parser.parse("-(1+2)").unwrap().infix(), "neg(1+2)");
    assert_eq!(parser.parse("3!").unwrap().infix(), "fact(3)");
    assert_eq!(parser.parse("1-(-2)").unwrap().infix(), "1-(-2)");
    assert_eq!(parser.parse("2^3^2").unwrap().infix(), "2^3^2");
    assert_eq!(parser.parse("(2^3)^2").unwrap().infix(), "(2^3)^2");
}

#[test]
pub fn infix_round_trip_test() {
    let parser = make_parser::<f64>();

    for expression in [
        "1+2*3",
        "-(1+2)",
        "2^3^2",
        "hypot(3,4)+1",
        "3!",
        "-2^2",
        "1-(-2)",
        "abs(3)+4*2/(1-5)^2^3",
    ] {
        let node = parser.from_infix(expression, &[]).unwrap();
        let replayed = parser.from_infix(&node.infix(), &[]).unwrap();
        assert!(replayed == node, "round trip of {}", expression);
        assert_eq!(
            hash_of(&replayed),
            hash_of(&node),
            "hash agreement of {}",
            expression
        );
        assert_eq!(replayed.infix(), node.infix());
    }
}

#[test]
pub fn tree_serialization_test() {
    let parser = make_parser::<f64>();

    let node = parser.from_infix("1+2", &[]).unwrap();
    assert_eq!(node.tree(), "[+]\n \\_[1]\n \\_[2]");

    let node = parser.from_infix("abs(3)+4*2/(1-5)^2^3", &[]).unwrap();
    let expected = [
        "[+]",
        " \\_[abs]",
        " |  \\_[3]",
        " \\_[/]",
        "    \\_[*]",
        "    |  \\_[4]",
        "    |  \\_[2]",
        "    \\_[^]",
        "       \\_[-]",
        "       |  \\_[1]",
        "       |  \\_[5]",
        "       \\_[^]",
        "          \\_[2]",
        "          \\_[3]",
    ]
    .join("\n");
    assert_eq!(node.tree(), expected);

    node.print().unwrap();
}

#[test]
pub fn display_test() {
    let parser = make_parser::<f64>();
    let node = parser.parse("x + 1").unwrap();
    assert_eq!(format!("{}", node), node.infix());
}

#[test]
pub fn children_access_test() {
    let parser = make_parser::<f64>();

    let node = parser.from_infix("1 + x*y", &["x", "y"]).unwrap();
    assert_eq!(node.branches(), 2);
    assert_eq!(node.token(), "+");
    assert_eq!(node[0].token(), "1");
    assert_eq!(node[1].token(), "*");
    assert_eq!(node[1][0].token(), "x");
    assert_eq!(node.iter().count(), 2);
    assert!(node.at(2).is_none());

    let mut tokens: Vec<&str> = Vec::new();
    for child in &node {
        tokens.push(child.token());
    }
    assert_eq!(tokens, vec!["1", "*"]);
}

#[test]
pub fn equality_test() {
    let parser = make_parser::<f64>();

    let one = parser.from_infix("1 + 2", &[]).unwrap();
    let another = parser.from_infix("1 + 2", &[]).unwrap();
    assert!(one == another);
    assert_eq!(hash_of(&one), hash_of(&another));

    let different = parser.from_infix("2 + 1", &[]).unwrap();
    assert!(one != different);

    // variable leaves match by declared position
    let by_position = parser.from_infix("x+y", &["x", "y"]).unwrap();
    let reordered = parser.from_infix("x+y", &["y", "x"]).unwrap();
    assert!(by_position != reordered);

    let same_positions = parser.from_infix("x+y", &["x", "y"]).unwrap();
    assert!(by_position == same_positions);
}

#[test]
pub fn clone_rebinding_test() {
    let parser = make_parser::<f64>();

    let node = parser.from_infix("x + y", &["x", "y"]).unwrap();
    let copy = node.clone();
    assert!(copy == node);
    assert_eq!(copy.variables().to_vec(), vec!["x", "y"]);

    // both trees stay independently evaluable
    assert_eq!(node.eval(&[1.0, 2.0]).unwrap(), 3.0);
    assert_eq!(copy.eval(&[10.0, 20.0]).unwrap(), 30.0);
    assert_eq!(node.eval(&[1.0, 2.0]).unwrap(), 3.0);

    // a cloned subtree prunes onto its own variables
    let node = parser.from_infix("1 + x*y", &["x", "y"]).unwrap();
    let product = node[1].clone();
    assert_eq!(product.variables().to_vec(), vec!["x", "y"]);
    assert_eq!(product.eval(&[3.0, 4.0]).unwrap(), 12.0);

    let leaf = node[0].clone();
    assert!(leaf.variables().is_empty());
    assert_eq!(leaf.value().unwrap(), 1.0);
}

#[test]
pub fn pruned_variables_test() {
    let parser = make_parser::<f64>();

    let node = parser.from_infix("x + y", &["x", "y"]).unwrap();
    assert_eq!(node.pruned().to_vec(), vec!["x", "y"]);
    assert_eq!(node[0].pruned().to_vec(), vec!["x"]);

    let node = parser.from_infix("1 + x", &["x"]).unwrap();
    assert!(node[0].pruned().is_empty());
}

#[test]
pub fn value_test() {
    let parser = make_parser::<f64>();

    assert_eq!(parser.parse("2+3").unwrap().value().unwrap(), 5.0);
    assert!(matches!(
        parser.parse("x").unwrap().value(),
        Err(Error::ArgumentsMismatch {
            needed: 1,
            provided: 0,
            ..
        })
    ));
}

#[test]
pub fn substitution_test() {
    let parser = make_parser::<f64>();

    let node = parser.parse("x + y").unwrap();
    let bound = parser.substitute(&node, "x", 1.0).unwrap();
    assert_eq!(bound.variables().to_vec(), vec!["y"]);
    assert_eq!(bound.infix(), "1+y");
    assert_eq!(bound.eval(&[2.0]).unwrap(), 3.0);

    let closed = parser.substitute(&bound, "y", 2.0).unwrap();
    assert!(closed.variables().is_empty());
    assert_eq!(closed.value().unwrap(), 3.0);
    assert_eq!(closed.value().unwrap(), node.eval(&[1.0, 2.0]).unwrap());

    assert!(matches!(
        parser.substitute(&node, "z", 1.0),
        Err(Error::UndefinedSymbol(token)) if token == "z"
    ));

    // every occurrence is replaced
    let node = parser.parse("x + x * 2").unwrap();
    let closed = parser.substitute(&node, "x", 3.0).unwrap();
    assert_eq!(closed.value().unwrap(), 9.0);
}

#[test]
pub fn optimization_test() {
    let parser = make_parser::<f64>();

    let node = parser.parse("1 + 2 * 3").unwrap();
    let folded = parser.optimize(&node);
    assert_eq!(folded.branches(), 0);
    assert_eq!(folded.infix(), "7");
    assert_eq!(folded.value().unwrap(), node.value().unwrap());

    let node = parser.parse("x + 2 * 3").unwrap();
    let folded = parser.optimize(&node);
    assert_eq!(folded.infix(), "x+6");
    assert_eq!(folded.variables().to_vec(), vec!["x"]);
    for argument in [-1.0, 0.0, 2.5] {
        assert_eq!(
            folded.eval(&[argument]).unwrap(),
            node.eval(&[argument]).unwrap()
        );
    }

    // folding a function call
    let node = parser.parse("hypot(3, 4) + x").unwrap();
    let folded = parser.optimize(&node);
    assert_eq!(folded.infix(), "5+x");
}
