//! Test fixtures and constants.

/// Template file name used by most tests.
pub const TEMPLATE: &str = "wp-config.php.tpl";

/// A trimmed WordPress config template covering every token kind,
/// including an instance-prefixed port token.
pub const SAMPLE_TEMPLATE: &str = r#"<?php
define( 'DB_NAME', 'DB_NAME_PLACEHOLDER' );
define( 'DB_USER', 'DB_USER_PLACEHOLDER' );
define( 'DB_PASSWORD', 'DB_PASSWORD_PLACEHOLDER' );
define( 'DB_HOST', 'DB_HOST_PLACEHOLDER' );
define( 'AUTH_KEY',         'AUTH_KEY_PLACEHOLDER' );
define( 'SECURE_AUTH_KEY',  'SECURE_AUTH_KEY_PLACEHOLDER' );
define( 'LOGGED_IN_KEY',    'LOGGED_IN_KEY_PLACEHOLDER' );
define( 'NONCE_KEY',        'NONCE_KEY_PLACEHOLDER' );
define( 'AUTH_SALT',        'AUTH_SALT_PLACEHOLDER' );
define( 'SECURE_AUTH_SALT', 'SECURE_AUTH_SALT_PLACEHOLDER' );
define( 'LOGGED_IN_SALT',   'LOGGED_IN_SALT_PLACEHOLDER' );
define( 'NONCE_SALT',       'NONCE_SALT_PLACEHOLDER' );
$table_prefix = 'TABLE_PREFIX_PLACEHOLDER';
define( 'WP_HOME', 'http://localhost:SHOP1_PORT_PLACEHOLDER' );
define( 'WP_SITEURL', 'http://localhost:SHOP1_PORT_PLACEHOLDER' );
"#;

/// A password that passes validation.
pub const GOOD_PASSWORD: &str = "fH8kP2mN9q-unique";

/// Complete profile flags for the `shop_1` instance.
pub fn profile_flags() -> Vec<&'static str> {
    vec![
        "--name",
        "shop_1",
        "--port",
        "8081",
        "--db-name",
        "bitnami_wordpress",
        "--db-user",
        "bn_wordpress",
        "--db-password",
        GOOD_PASSWORD,
        "--db-host",
        "mariadb_shop1:3306",
        "--table-prefix",
        "wp_",
    ]
}

/// A fleet manifest with two instances sharing defaults.
pub const SAMPLE_MANIFEST: &str = r#"
[defaults]
db_name = "bitnami_wordpress"
db_user = "bn_wordpress"
db_password = "fH8kP2mN9q-unique"
table_prefix = "wp_"

[[instance]]
name = "shop_1"
port = 8081
db_host = "mariadb_shop1:3306"

[[instance]]
name = "shop_2"
port = 8082
db_host = "mariadb_shop2:3306"
"#;
