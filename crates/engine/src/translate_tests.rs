// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sh_probe(script: &str) -> ProbeTranslator {
    ProbeTranslator::new(PathProbe {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        separator: "/".to_string(),
    })
}

#[tokio::test]
async fn native_paths_pass_through() {
    let translated = NativePaths.translate(Path::new("/some/where")).await.unwrap();
    assert_eq!(translated, "/some/where");
    assert!(NativePaths.is_identity());
}

fn request(interpreter: &str, namespace: PathNamespace) -> ExecutionRequest {
    ExecutionRequest::inline("true", "/").interpreter(interpreter).path_namespace(namespace)
}

#[test]
fn translator_for_native_is_identity() {
    let env = Environment::new("/usr/bin/bash", "/tmp");
    assert!(translator_for(&request("bash", PathNamespace::Native), &env).is_identity());
}

#[test]
fn translator_for_probe_uses_probe_separator() {
    let env = Environment::new("/usr/bin/bash", "/tmp");
    let translator = translator_for(&request("bash", PathNamespace::Probe(PathProbe::cmd())), &env);
    assert!(!translator.is_identity());
    assert_eq!(translator.separator(), "\\");
}

/// The probe name is not on PATH, so translation only succeeds when the
/// resolved interpreter path is spawned instead.
#[cfg(unix)]
#[tokio::test]
async fn probe_spawns_the_resolved_interpreter() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    let probe = PathProbe {
        program: "rr-unresolved-shell".to_string(),
        args: vec!["-c".to_string(), "pwd -P".to_string()],
        separator: "/".to_string(),
    };
    let env = Environment::new("/bin/sh", dir.path());

    let matching =
        translator_for(&request("rr-unresolved-shell", PathNamespace::Probe(probe.clone())), &env);
    assert_eq!(matching.translate(dir.path()).await.unwrap(), canonical.to_str().unwrap());

    let unrelated = translator_for(&request("sh", PathNamespace::Probe(probe)), &env);
    let err = unrelated.translate(dir.path()).await.unwrap_err();
    assert!(err.to_string().contains("rr-unresolved-shell"), "{err}");
}
