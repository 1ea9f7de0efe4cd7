//! Test fixtures and stub scripts.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Properties blob with a single well-formed endpoint.
pub const STANDARD_PROPERTIES: &str = "es.host = http://example:9200\nes.port = 9200\n";

/// Endpoint carried by [`STANDARD_PROPERTIES`].
pub const STANDARD_ENDPOINT: &str = "http://example:9200";

/// Build a kubectl-shaped secret document whose data holds `properties`
/// base64-encoded under `elasticsearch.properties`.
pub fn secret_json(properties: &str) -> String {
    secret_json_with_key("elasticsearch.properties", properties)
}

/// Same as [`secret_json`], with an explicit data key.
pub fn secret_json_with_key(key: &str, properties: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": {"name": "elasticsearch-params", "namespace": "default"},
        "type": "Opaque",
        "data": { key: BASE64.encode(properties) }
    })
    .to_string()
}

/// Stub `python3` that handles `-m venv <dir>` by creating a fake venv
/// whose `pip` records its invocations in `pip.log`.
pub const PYTHON3_STUB: &str = r#"#!/bin/sh
echo "python3 $*" >> python3.log
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
  mkdir -p "$3/bin"
  cat > "$3/bin/pip" <<'EOS'
#!/bin/sh
echo "pip $*" >> pip.log
exit 0
EOS
  chmod +x "$3/bin/pip"
fi
exit 0
"#;

/// Like [`PYTHON3_STUB`], but the venv's `pip` fails every install the
/// way a nonexistent package would.
pub const PYTHON3_STUB_BAD_PIP: &str = r#"#!/bin/sh
echo "python3 $*" >> python3.log
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
  mkdir -p "$3/bin"
  cat > "$3/bin/pip" <<'EOS'
#!/bin/sh
echo "pip $*" >> pip.log
echo "ERROR: No matching distribution found" >&2
exit 1
EOS
  chmod +x "$3/bin/pip"
fi
exit 0
"#;

/// Stub `curl` that routes on method and URL path, serving canned
/// responses from `cluster/` fixture files and logging every invocation
/// (including request bodies) to `curl.log`.
pub const CURL_STUB: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> curl.log
method=GET
url=""
prev=""
for a in "$@"; do
  [ "$prev" = "-X" ] && method="$a"
  case "$a" in
    http://*|https://*) url="$a" ;;
  esac
  prev="$a"
done
path="${url#*://*/}"
case "$method $path" in
  "GET _template")
    cat cluster/templates.json ;;
  "GET _template/"*)
    name="${path#_template/}"
    if [ -f "cluster/template_$name.json" ]; then
      cat "cluster/template_$name.json"
    else
      echo '{}'
    fi ;;
  "PUT _template/"*)
    echo '{"acknowledged": true}' ;;
  "POST "*"/_doc")
    echo '{"result": "created"}' ;;
  "GET "*"/_settings")
    idx="${path%/_settings}"
    if [ -f "cluster/settings_$idx.json" ]; then
      cat "cluster/settings_$idx.json"
    else
      echo '{}'
    fi ;;
  "DELETE "*)
    echo '{"acknowledged": true}' ;;
  *)
    echo '{}' ;;
esac
"#;
