use sftp_rename::models::*;
use sftp_rename::session::{LocalSession, Session, StatusCode};
use speculate2::speculate;
use tokio_test::block_on;

fn write(root: &std::path::Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create dir");
    std::fs::write(path, content).expect("Failed to write file");
}

speculate! {
    before {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        write(root.path(), "home/alice/testServer/a.md", "hello");
        write(root.path(), "home/alice/testServer/b.md", "");
        std::fs::create_dir_all(root.path().join("home/alice/testServer/sub")).expect("Failed to create dir");
        let session = LocalSession::new(root.path()).with_cwd("/home/alice");
    }

    describe "cwd" {
        it "reports the configured working directory" {
            assert_eq!(session.cwd(), "/home/alice");
        }

        it "defaults to the root" {
            assert_eq!(LocalSession::new(root.path()).cwd(), "/");
        }
    }

    describe "list_raw" {
        it "returns entries sorted by name" {
            let entries = block_on(session.list_raw("/home/alice/testServer")).expect("List failed");
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["a.md", "b.md", "sub"]);
        }

        it "reports kinds and sizes" {
            let entries = block_on(session.list_raw("/home/alice/testServer")).expect("List failed");
            assert_eq!(entries[0].kind, FileKind::File);
            assert_eq!(entries[0].size, 5);
            assert!(entries[0].modify_time.is_some());
            assert_eq!(entries[2].kind, FileKind::Directory);
        }

        it "fails with no such file for a missing directory" {
            let err = block_on(session.list_raw("/home/alice/missing")).unwrap_err();
            assert_eq!(err.code(), Some(StatusCode::NoSuchFile));
        }
    }

    describe "stat_raw" {
        it "reports the final segment as the name" {
            let entry = block_on(session.stat_raw("/home/alice/testServer/a.md")).expect("Stat failed");
            assert_eq!(entry.name, "a.md");
            assert_eq!(entry.kind, FileKind::File);
        }

        it "does not follow symlinks" {
            #[cfg(unix)]
            {
                std::os::unix::fs::symlink(
                    root.path().join("home/alice/testServer/a.md"),
                    root.path().join("home/alice/link.md"),
                ).expect("Failed to create symlink");

                let entry = block_on(session.stat_raw("/home/alice/link.md")).expect("Stat failed");
                assert_eq!(entry.kind, FileKind::Symlink);
            }
        }
    }

    describe "rename_raw" {
        it "refuses an existing destination with a failure status" {
            let err = block_on(session.rename_raw(
                "/home/alice/testServer/a.md",
                "/home/alice/testServer/b.md",
            )).unwrap_err();
            assert_eq!(err.code(), Some(StatusCode::Failure));
            assert_eq!(err.to_string(), "Failure");
        }

        it "reports a missing source as no such file" {
            let err = block_on(session.rename_raw(
                "/home/alice/testServer/nope.md",
                "/home/alice/testServer/c.md",
            )).unwrap_err();
            assert_eq!(err.code(), Some(StatusCode::NoSuchFile));
            assert_eq!(err.to_string(), "No such file");
        }

        it "refuses paths that climb above the root" {
            let err = block_on(session.rename_raw(
                "/home/alice/testServer/a.md",
                "/../../escaped.md",
            )).unwrap_err();
            assert_eq!(err.code(), Some(StatusCode::PermissionDenied));
            assert!(root.path().join("home/alice/testServer/a.md").exists());
            assert!(!root.path().join("escaped.md").exists());
        }

        it "removes the new link when the source cannot be unlinked" {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;

                write(root.path(), "home/alice/locked/c.md", "locked");
                let locked = root.path().join("home/alice/locked");
                std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555))
                    .expect("Failed to lock dir");

                // privileged users ignore directory permissions
                let privileged = std::fs::write(locked.join("check"), "").is_ok();
                if !privileged {
                    let err = block_on(session.rename_raw(
                        "/home/alice/locked/c.md",
                        "/home/alice/testServer/c.md",
                    )).unwrap_err();
                    assert_eq!(err.code(), Some(StatusCode::PermissionDenied));
                    assert!(locked.join("c.md").exists());
                    assert!(!root.path().join("home/alice/testServer/c.md").exists());
                }

                std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
                    .expect("Failed to unlock dir");
            }
        }
    }
}
