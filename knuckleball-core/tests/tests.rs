use knuckleball_core::{Error, PrimitiveType, TypeTag};

#[test]
fn primitive_type_tags() {
    for ty in PrimitiveType::ALL.iter().copied() {
        assert_eq!(ty.name().parse::<TypeTag>(), Ok(TypeTag::Primitive(ty)));
    }
}

#[test]
fn container_type_tags() {
    assert_eq!(
        "Vector<Integer>".parse::<TypeTag>(),
        Ok(TypeTag::Vector(PrimitiveType::Integer))
    );
    assert_eq!(
        "Set< String >".parse::<TypeTag>(),
        Ok(TypeTag::Set(PrimitiveType::String))
    );
    assert_eq!(
        "Dictionary<String, Integer>".parse::<TypeTag>(),
        Ok(TypeTag::Dictionary(
            PrimitiveType::String,
            PrimitiveType::Integer
        ))
    );
    assert_eq!(
        TypeTag::Dictionary(PrimitiveType::Character, PrimitiveType::Float).to_string(),
        "Dictionary<Character,Float>"
    );
}

#[test]
fn invalid_type_tags() {
    assert_eq!("Vector".parse::<TypeTag>(), Err(Error::InvalidStatement));
    assert_eq!(
        "Vector<Vector<Integer>>".parse::<TypeTag>(),
        Err(Error::InvalidStatement)
    );
    assert_eq!(
        "Dictionary<String>".parse::<TypeTag>(),
        Err(Error::InvalidStatement)
    );
    assert_eq!("integer".parse::<TypeTag>(), Err(Error::InvalidStatement));
}

#[test]
fn error_messages() {
    let expected: &[(Error, &str)] = &[
        (Error::InvalidStatement, "SyntaxError: invalid statement."),
        (Error::InvalidArgument, "RuntimeError: invalid argument."),
        (Error::InvalidMessage, "RuntimeError: invalid message."),
        (
            Error::VariableNameAlreadyUsed,
            "RuntimeError: variable name already used.",
        ),
        (
            Error::UnexistentVariable,
            "RuntimeError: name cannot be resolved to a variable.",
        ),
        (
            Error::WrongNumberOfArguments,
            "RuntimeError: wrong number of arguments.",
        ),
        (
            Error::InvalidComparison,
            "RuntimeError: cannot compare these two types.",
        ),
        (Error::NotAuthenticated, "AuthenticationError: not authenticated."),
        (Error::WrongPassword, "AuthenticationError: wrong password."),
        (Error::Unknown, "RuntimeError: unknown error."),
    ];

    for (error, text) in expected {
        assert_eq!(error.to_string(), *text);
    }
}
