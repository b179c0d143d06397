use super::*;

/// Tests that a valid token with no permissions yields the caller.
///
/// Expected: Ok(Principal) carrying the token's user and role
#[test]
fn authenticates_valid_token() -> Result<(), AppError> {
    let tokens = tokens();
    let headers = headers_for(&tokens, 7, UserRole::TeamMember);

    let principal = AuthGuard::new(&tokens, &headers).require(&[])?;

    assert_eq!(principal.user_id, 7);
    assert_eq!(principal.role, UserRole::TeamMember);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an Authorization header using another scheme.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_non_bearer_scheme() {
    let tokens = tokens();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_forged_token() {
    let tokens = tokens();
    let forger = TokenService::new(b"some-other-secret", Duration::minutes(60));
    let headers = headers_for(&forger, 1, UserRole::Admin);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests a token whose expiry is well in the past.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let tokens = tokens();
    let issued = Utc::now() - Duration::hours(3);
    let token = tokens.sign_claims(&Claims {
        user_id: 1,
        role: UserRole::Admin,
        iat: issued.timestamp(),
        exp: (issued + Duration::hours(1)).timestamp(),
    });
    let headers = bearer(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests the admin permission for admins and non-admins.
///
/// Expected: Ok for ADMIN, Err(AuthError::AccessDenied) for PROJECT_MANAGER
#[test]
fn admin_permission_checks_role() {
    let tokens = tokens();

    let admin = headers_for(&tokens, 1, UserRole::Admin);
    assert!(AuthGuard::new(&tokens, &admin)
        .require(&[Permission::Admin])
        .is_ok());

    let manager = headers_for(&tokens, 2, UserRole::ProjectManager);
    let result = AuthGuard::new(&tokens, &manager).require(&[Permission::Admin]);
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(2, _)))
    ));
}

/// Tests the project manager permission.
///
/// Expected: Ok for PROJECT_MANAGER, Err(AuthError::AccessDenied) for ADMIN and TEAM_MEMBER
#[test]
fn project_manager_permission_checks_role() {
    let tokens = tokens();

    let manager = headers_for(&tokens, 2, UserRole::ProjectManager);
    assert!(AuthGuard::new(&tokens, &manager)
        .require(&[Permission::ProjectManager])
        .is_ok());

    for (id, role) in [(1, UserRole::Admin), (3, UserRole::TeamMember)] {
        let headers = headers_for(&tokens, id, role);
        let result = AuthGuard::new(&tokens, &headers).require(&[Permission::ProjectManager]);
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }
}

/// Tests self-or-admin access to a user record.
///
/// Expected: Ok for the user themself and for an admin, Err(AuthError::AccessDenied) otherwise
#[test]
fn self_or_admin_permission() {
    let tokens = tokens();

    let member = headers_for(&tokens, 5, UserRole::TeamMember);
    assert!(AuthGuard::new(&tokens, &member)
        .require(&[Permission::SelfOrAdmin(5)])
        .is_ok());

    let result = AuthGuard::new(&tokens, &member).require(&[Permission::SelfOrAdmin(6)]);
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(5, _)))
    ));

    let admin = headers_for(&tokens, 1, UserRole::Admin);
    assert!(AuthGuard::new(&tokens, &admin)
        .require(&[Permission::SelfOrAdmin(6)])
        .is_ok());
}

/// Tests that every listed permission must pass.
///
/// Expected: Err(AuthError::AccessDenied) when the second permission fails
#[test]
fn requires_all_permissions() {
    let tokens = tokens();
    let manager = headers_for(&tokens, 2, UserRole::ProjectManager);

    let result = AuthGuard::new(&tokens, &manager)
        .require(&[Permission::SelfOrAdmin(2), Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(2, _)))
    ));
}
