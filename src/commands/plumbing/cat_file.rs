use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::io::Write;

impl Repository {
    /// Print a stored object: blobs verbatim, commits field by field.
    pub fn cat_file(&self, object_type: &str, object_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_type = ObjectType::try_from(object_type)?;
        let object_id = ObjectId::try_parse(object_id.to_string())?;

        match object_type {
            ObjectType::Blob => {
                let blob = self.database().load_blob(&object_id)?;
                self.writer().write_all(blob.content())?;
            }
            ObjectType::Commit => {
                let commit = self.database().load_commit(&object_id)?;
                writeln!(self.writer(), "{}", commit.display())?;
            }
        }

        Ok(())
    }
}
