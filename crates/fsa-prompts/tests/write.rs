use fsa_prompts::{BUILD_INSTRUCTIONS_FILE, PromptSelection, build_plan, write_prompts};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn writes_prompt_files_and_instructions() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("mcp").join("prompts");
    let prompts = build_plan(PromptSelection::default());

    let written = write_prompts(&out, &prompts).unwrap();
    assert_eq!(written.len(), prompts.len() + 1);
    assert_eq!(
        written.last().unwrap().file_name().unwrap(),
        BUILD_INSTRUCTIONS_FILE
    );

    for prompt in &prompts {
        let text = std::fs::read_to_string(out.join(format!("{}.txt", prompt.name))).unwrap();
        assert_eq!(text, prompt.text);
    }
}

#[test]
fn unwritable_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "not a dir").unwrap();

    let prompts = build_plan(PromptSelection::default());
    assert!(write_prompts(&blocker.join("prompts"), &prompts).is_err());
}
