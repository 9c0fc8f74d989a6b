//! Human-readable startup banner printed to stdout.

use std::fmt::Write;
use std::net::SocketAddr;

const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "Información de la API"),
    ("GET", "/usuarios", "Obtener todos los usuarios"),
    ("GET", "/usuarios/<id>", "Obtener usuario por ID"),
    ("POST", "/usuarios", "Crear nuevo usuario"),
    ("PUT", "/usuarios/<id>", "Actualizar usuario"),
    ("DELETE", "/usuarios/<id>", "Eliminar usuario"),
    ("GET", "/buscar?nombre=<nombre>", "Buscar usuarios por nombre"),
];

/// Render the banner for a server listening on `addr`.
///
/// Unspecified addresses (`0.0.0.0`, `::`) are shown as `localhost`.
pub fn render(addr: SocketAddr) -> String {
    let host = if addr.ip().is_unspecified() {
        "localhost".to_string()
    } else {
        addr.ip().to_string()
    };
    let base = format!("http://{host}:{}", addr.port());

    let mut out = String::new();
    let _ = writeln!(out, "Iniciando API...");
    let _ = writeln!(out, "Servidor disponible en: {base}");
    let _ = writeln!(out, "Documentación de endpoints:");
    for (method, path, about) in ROUTES {
        let _ = writeln!(out, "   {method:<6} {path} - {about}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, " Ejemplos de uso:");
    let _ = writeln!(out, "   curl {base}/usuarios");
    let _ = write!(
        out,
        "   curl -X POST {base}/usuarios -H 'Content-Type: application/json' \
         -d '{{\"nombre\":\"Ana\",\"email\":\"ana@ejemplo.com\"}}'"
    );
    out
}
