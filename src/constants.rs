pub struct Constants;

impl Constants {
    pub const REPOSITORY_FOLDER_NAME: &str = ".git";
    pub const OBJECTS_FOLDER_NAME: &str = "objects";
    pub const REFS_FOLDER_NAME: &str = "refs";
    pub const HEADS_FOLDER_NAME: &str = "heads";
    pub const HEAD_FILE_NAME: &str = "HEAD";
    pub const HEAD_CONTENT_HEADER: &str = "ref: ";
    pub const DEFAULT_BRANCH_NAME: &str = "main";

    pub fn default_head_content() -> String {
        format!(
            "{}{}/{}/{}\n",
            Constants::HEAD_CONTENT_HEADER,
            Constants::REFS_FOLDER_NAME,
            Constants::HEADS_FOLDER_NAME,
            Constants::DEFAULT_BRANCH_NAME
        )
    }
}
