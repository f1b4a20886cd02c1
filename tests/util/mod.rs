//! Shared scaffolding for CLI integration tests

use std::fs;
use std::path::Path;

use sentinel_audit::audit::{
    BUCKET_FUNCTIONS, CSS_FILES, EXPECTED_FUNCTIONS, EXPECTED_MIGRATIONS, EXPECTED_TABLES,
    IMAGE_FILES, JS_FILES, REQUIRED_DIRS, REQUIRED_DOCS, REQUIRED_FILES,
};

fn write_bytes(path: &Path, len: usize) {
    fs::write(path, vec![b'x'; len]).unwrap();
}

/// Lay down a project tree that satisfies every check in the battery.
pub fn scaffold_project(root: &Path) {
    for dir in REQUIRED_DIRS {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in REQUIRED_FILES {
        fs::write(root.join(file), "placeholder").unwrap();
    }

    for func in EXPECTED_FUNCTIONS {
        let dir = root.join("supabase/functions").join(func);
        fs::create_dir_all(&dir).unwrap();
        write_bytes(&dir.join("index.ts"), 101);
    }
    for func in BUCKET_FUNCTIONS {
        write_bytes(
            &root.join("supabase/functions").join(func).join("index.ts.fixed"),
            101,
        );
    }

    for table in EXPECTED_TABLES {
        fs::write(root.join("supabase/tables").join(table), "-- ddl").unwrap();
    }
    for migration in EXPECTED_MIGRATIONS {
        fs::write(root.join("supabase/migrations").join(migration), "-- ddl").unwrap();
    }

    for doc in REQUIRED_DOCS {
        write_bytes(&root.join("docs").join(doc), 500);
    }

    for css in CSS_FILES {
        write_bytes(&root.join("novelforge-sentinel-pro/css").join(css), 1000);
    }
    for js in JS_FILES {
        write_bytes(&root.join("novelforge-sentinel-pro/js").join(js), 1000);
    }
    for image in IMAGE_FILES {
        write_bytes(&root.join("novelforge-sentinel-pro/images").join(image), 5000);
    }

    fs::write(
        root.join("supabase/config.json"),
        r#"{"project": {}, "supabase": {}, "security": {}, "ai_models": [], "client": {}}"#,
    )
    .unwrap();
}
