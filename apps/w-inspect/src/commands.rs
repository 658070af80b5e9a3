use anyhow::{bail, Context};
use serde::Serialize;
use tree_sitter_w::{
    LanguageResult, TypeTag, GRAMMAR_NAME, KEYS, LANGUAGE_KEY, LANGUAGE_TYPE_TAG, NAME_KEY,
};
use tree_sitter_w_node::{language_from_exports, Exports, HostContext, BINDING_NAME};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TagReport {
    lower: String,
    upper: String,
    tag: TypeTag,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportsReport {
    binding: &'static str,
    name: String,
    keys: Vec<String>,
    type_tag: Option<TypeTag>,
    table_address: String,
}

pub fn tag(json: bool) -> anyhow::Result<()> {
    if json {
        let report = TagReport {
            lower: format!("{:#018X}", LANGUAGE_TYPE_TAG.lower),
            upper: format!("{:#018X}", LANGUAGE_TYPE_TAG.upper),
            tag: LANGUAGE_TYPE_TAG,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", LANGUAGE_TYPE_TAG);
    }
    Ok(())
}

pub fn exports(json: bool) -> anyhow::Result<()> {
    let mut context = HostContext::with_grammar()?;
    let report = load_report(&mut context)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("binding: {}", report.binding);
        println!("name: {}", report.name);
        println!("keys: {}", report.keys.join(", "));
        if let Some(tag) = report.type_tag {
            println!("type tag: {}", tag);
        }
        println!("table: {}", report.table_address);
    }
    Ok(())
}

pub fn check(contexts: usize) -> anyhow::Result<()> {
    check_contexts(contexts, |_| HostContext::with_grammar())?;
    println!("ok: {contexts} context(s) export '{GRAMMAR_NAME}' with a verified language table");
    Ok(())
}

/// Load the binding in `contexts` fresh contexts and require every one of
/// them to resolve the same table.
fn check_contexts<F>(contexts: usize, mut new_context: F) -> anyhow::Result<ExportsReport>
where
    F: FnMut(usize) -> LanguageResult<HostContext>,
{
    if contexts == 0 {
        bail!("--contexts must be at least 1");
    }

    let mut first: Option<ExportsReport> = None;
    for index in 0..contexts {
        let mut context = new_context(index)?;
        let report = load_report(&mut context).with_context(|| format!("context {index}"))?;

        if let Some(expected) = &first {
            if report.table_address != expected.table_address {
                bail!(
                    "context {index} resolved table {} but context 0 resolved {}",
                    report.table_address,
                    expected.table_address
                );
            }
        } else {
            first = Some(report);
        }
    }

    first.context("no context was loaded")
}

fn load_report(context: &mut HostContext) -> anyhow::Result<ExportsReport> {
    let exports = context.require(BINDING_NAME)?;

    let keys = exports.keys();
    let mut expected: Vec<String> = KEYS.iter().map(|key| key.to_string()).collect();
    expected.sort();
    if keys != expected {
        bail!("unexpected export keys: {}", keys.join(", "));
    }

    let name = exports
        .get(NAME_KEY)
        .and_then(|value| value.as_str())
        .context("name export is not a string")?;
    if name != GRAMMAR_NAME {
        bail!("name export is '{name}', expected '{GRAMMAR_NAME}'");
    }

    let table = language_from_exports(exports)?;
    let type_tag = exports
        .get(LANGUAGE_KEY)
        .and_then(|value| value.as_external().and_then(|external| external.tag()));

    tracing::info!(binding = BINDING_NAME, table = ?table, "Verified exports");

    Ok(ExportsReport {
        binding: BINDING_NAME,
        name: name.to_string(),
        keys,
        type_tag,
        table_address: format!("{:#x}", table.addr()),
    })
}
