//! Sprout's main application entry point and orchestration logic.
//! Handles command-line argument parsing, template loading and the
//! generation run.

use sprout::{
    cli::{get_args, Args},
    config::JsonIndent,
    data::get_data,
    error::{default_error_handler, Result},
    git::init_git,
    hooks::{confirm_hook_execution, HookLoader, ScriptHookLoader, SkipHookLoader},
    loader::load_template,
    logger::init_logger,
    parser::parse_template,
    processor::Processor,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template from a local path or git repository
/// 2. Collects template data from the data file, stdin and `--data` pairs
/// 3. Parses the template tree
/// 4. Confirms hook execution if the template contains hook modules
/// 5. Generates the tree into the output directory
/// 6. Optionally initializes a git repository where the root directory was generated
fn run(args: Args) -> Result<()> {
    let output_root = match args.output_dir {
        Some(output_dir) => output_dir,
        None => std::env::current_dir()?,
    };

    let template = load_template(&args.template)?;
    let mut data = get_data(args.data_file.as_ref(), args.stdin, &args.data)?;
    let tree = parse_template(template.path())?;

    let execute_hooks = confirm_hook_execution(&tree, args.skip_hooks_check)?;
    let hooks: Box<dyn HookLoader> = if execute_hooks {
        Box::new(ScriptHookLoader)
    } else {
        Box::new(SkipHookLoader)
    };

    let json_indent: JsonIndent = args.json_indent.parse()?;
    let renderer = MiniJinjaRenderer::new();
    let processor = Processor::new(&renderer, &*hooks, &json_indent);
    let project_root = processor.generate(tree, &mut data, &output_root)?;

    if args.init_git {
        init_git(&project_root)?;
    }

    println!("Template generation completed successfully in {}.", project_root.display());
    Ok(())
}
