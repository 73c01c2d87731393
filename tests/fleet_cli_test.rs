//! End-to-end tests for `stencil fleet`.

mod support;

use predicates::prelude::*;
use support::{Test, SAMPLE_MANIFEST, SAMPLE_TEMPLATE, TEMPLATE};

/// A template variant without the instance-prefixed port token, usable
/// by every instance in a fleet.
const FLEET_TEMPLATE: &str = r#"<?php
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
define( 'WP_HOME', 'http://localhost:PORT_PLACEHOLDER' );
"#;

fn fleet_setup() -> Test {
    let t = Test::new();
    t.write(TEMPLATE, FLEET_TEMPLATE);
    t.write("fleet.toml", SAMPLE_MANIFEST);
    t
}

#[test]
fn fleet_renders_every_instance() {
    let t = fleet_setup();

    let output = t.fleet(&[
        "--manifest",
        "fleet.toml",
        "--template",
        TEMPLATE,
        "--out-dir",
        "out",
    ]);
    assert!(
        output.status.success(),
        "fleet failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let shop1 = t.read("out/shop_1.php");
    let shop2 = t.read("out/shop_2.php");
    assert!(shop1.contains("http://localhost:8081"));
    assert!(shop2.contains("http://localhost:8082"));
    assert!(shop1.contains("mariadb_shop1:3306"));
    assert!(shop2.contains("mariadb_shop2:3306"));
    assert!(!shop1.contains("_PLACEHOLDER"));
    assert!(!shop2.contains("_PLACEHOLDER"));
}

#[test]
fn instances_never_share_secrets() {
    let t = fleet_setup();

    assert!(t
        .fleet(&[
            "--manifest",
            "fleet.toml",
            "--template",
            TEMPLATE,
            "--out-dir",
            "out",
        ])
        .status
        .success());

    let auth_key = |text: &str| {
        text.lines()
            .find(|l| l.contains("'AUTH_KEY'"))
            .unwrap()
            .to_string()
    };
    assert_ne!(auth_key(&t.read("out/shop_1.php")), auth_key(&t.read("out/shop_2.php")));
}

#[test]
fn secrets_dir_pins_across_runs() {
    let t = fleet_setup();
    let args = [
        "--manifest",
        "fleet.toml",
        "--template",
        TEMPLATE,
        "--out-dir",
        "out",
        "--secrets-dir",
        "secrets",
    ];

    assert!(t.fleet(&args).status.success());
    assert!(t.path("secrets/shop_1.secrets.toml").exists());
    assert!(t.path("secrets/shop_2.secrets.toml").exists());
    let first = t.read("out/shop_1.php");

    // Re-running with the same secrets dir reproduces the same configs.
    let mut rerun = args.to_vec();
    rerun.push("--force");
    assert!(t.fleet(&rerun).status.success());
    assert_eq!(t.read("out/shop_1.php"), first);
}

#[test]
fn fleet_refuses_to_overwrite_without_force() {
    let t = fleet_setup();
    let args = [
        "--manifest",
        "fleet.toml",
        "--template",
        TEMPLATE,
        "--out-dir",
        "out",
    ];

    assert!(t.fleet(&args).status.success());

    let output = t.fleet(&args);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("refusing to overwrite"));
}

#[test]
fn empty_manifest_is_rejected() {
    let t = Test::new();
    t.write(TEMPLATE, FLEET_TEMPLATE);
    t.write("fleet.toml", "[defaults]\ndb_name = \"x\"\n");

    let mut cmd = t.cmd();
    cmd.args([
        "fleet",
        "--manifest",
        "fleet.toml",
        "--template",
        TEMPLATE,
        "--out-dir",
        "out",
    ]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("no instances"));
}

#[test]
fn missing_manifest_exits_two() {
    let t = Test::new();
    t.write(TEMPLATE, SAMPLE_TEMPLATE);

    let mut cmd = t.cmd();
    cmd.args([
        "fleet",
        "--manifest",
        "missing.toml",
        "--template",
        TEMPLATE,
        "--out-dir",
        "out",
    ]);
    cmd.assert().code(2);
}

#[test]
fn duplicate_instance_names_are_rejected() {
    let t = Test::new();
    t.write(TEMPLATE, FLEET_TEMPLATE);
    t.write(
        "fleet.toml",
        &format!(
            "{}\n[[instance]]\nname = \"shop_1\"\nport = 8083\ndb_host = \"h:3306\"\n",
            SAMPLE_MANIFEST
        ),
    );

    let mut cmd = t.cmd();
    cmd.args([
        "fleet",
        "--manifest",
        "fleet.toml",
        "--template",
        TEMPLATE,
        "--out-dir",
        "out",
    ]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate instance name"));
}
