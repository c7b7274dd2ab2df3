use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../frontend/dist");

    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).unwrap();

    if dist_dir.exists() {
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    } else {
        // Keep `include_dir!("static/dist")` satisfied when the frontend
        // bundle has not been built yet.
        fs::create_dir_all(out_dir.join("dist")).unwrap();
        fs::write(
            out_dir.join("dist").join("index.html"),
            "<!doctype html><html><body>Frontend no compilado. Ejecuta `trunk build` en frontend/.</body></html>",
        )
        .unwrap();
    }
}
