//! Print the OpenAPI document as JSON, or as YAML with `--yaml`.

use std::io;

use contacts::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let doc = ApiDoc::openapi();
    let rendered = if std::env::args().skip(1).any(|arg| arg == "--yaml") {
        doc.to_yaml().map_err(io::Error::other)?
    } else {
        doc.to_pretty_json().map_err(io::Error::other)?
    };
    println!("{rendered}");
    Ok(())
}
