//! Generate alias scripts from the alias definition document

use std::fs;

use anyhow::{Context, Result};
use shalias_core::collector::AliasCollector;
use shalias_core::AliasesProcessor;
use shalias_script::{BashScriptBuilder, ScriptBuilder, WindowsScriptBuilder};
use tracing::info;

use crate::cli::{GenerateArgs, ScriptId};
use crate::output;

pub fn run(args: GenerateArgs) -> Result<()> {
    if args.skip {
        output::info("alias script generation skipped");
        return Ok(());
    }

    let source = fs::read_to_string(&args.aliases)
        .with_context(|| format!("failed to read alias definitions from '{}'", args.aliases))?;
    info!("read alias definitions from '{}'", args.aliases);

    let mut builders = create_builders(&args);

    let processor = AliasesProcessor::new(&source)
        .with_context(|| format!("invalid alias definitions in '{}'", args.aliases))?;
    let mut collectors: Vec<&mut dyn AliasCollector> = builders
        .iter_mut()
        .map(|builder| builder.as_mut() as &mut dyn AliasCollector)
        .collect();
    processor
        .process(&mut collectors)
        .with_context(|| format!("invalid alias definitions in '{}'", args.aliases))?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create output directory '{}'", args.output))?;

    for builder in &builders {
        let path = args.output.join(builder.id());
        fs::write(&path, builder.create_script())
            .with_context(|| format!("failed to write alias script '{path}'"))?;
        output::success(&format!("wrote {path}"));
    }

    Ok(())
}

fn create_builders(args: &GenerateArgs) -> Vec<Box<dyn ScriptBuilder>> {
    let mut ids: Vec<ScriptId> = Vec::new();
    for id in if args.scripts.is_empty() {
        vec![ScriptId::Bash, ScriptId::Windows]
    } else {
        args.scripts.clone()
    } {
        if ids.contains(&id) {
            output::warning(&format!("ignoring duplicate script selection '{id:?}'"));
        } else {
            ids.push(id);
        }
    }

    ids.into_iter()
        .map(|id| {
            let mut builder: Box<dyn ScriptBuilder> = match id {
                ScriptId::Bash => Box::new(BashScriptBuilder::new(args.help_alias.clone())),
                ScriptId::Windows => Box::new(WindowsScriptBuilder::new(args.help_alias.clone())),
            };
            builder.set_comment_intro(args.intro.clone());
            builder.set_comment_extro(args.extro.clone());
            builder.set_doc_url(args.doc_url.clone());
            builder.set_add_installation_comment(args.installation_comment);
            builder
        })
        .collect()
}
