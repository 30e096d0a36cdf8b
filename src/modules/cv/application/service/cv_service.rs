use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::cv::application::domain::entities::{
    CvFile, CvUpload, NewCvFile, CV_BUCKET, CV_OBJECT_PREFIX,
};
use crate::modules::cv::application::ports::incoming::{
    DeleteCvUseCase, GetActiveCvUseCase, ListCvFilesUseCase, SetActiveCvUseCase, UploadCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::CvFileRepository;
use crate::shared::activation::activate_exclusively;
use crate::shared::content::ContentError;
use crate::shared::object_storage::ObjectStorage;
use crate::shared::supabase::timestamped_object_name;

pub struct CvService<R, S>
where
    R: CvFileRepository,
    S: ObjectStorage,
{
    repository: R,
    storage: S,
}

impl<R, S> CvService<R, S>
where
    R: CvFileRepository,
    S: ObjectStorage,
{
    pub fn new(repository: R, storage: S) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R, S> ListCvFilesUseCase for CvService<R, S>
where
    R: CvFileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CvFile>, ContentError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R, S> GetActiveCvUseCase for CvService<R, S>
where
    R: CvFileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self) -> Result<Option<CvFile>, ContentError> {
        Ok(self.repository.get_active().await?)
    }
}

#[async_trait]
impl<R, S> UploadCvUseCase for CvService<R, S>
where
    R: CvFileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, upload: CvUpload) -> Result<CvFile, ContentError> {
        upload.validate()?;

        let object = timestamped_object_name(
            CV_OBJECT_PREFIX,
            &upload.filename,
            Utc::now().timestamp_millis(),
        );
        let file_size = upload.bytes.len() as i64;
        let file_url = self
            .storage
            .put(CV_BUCKET, &object, upload.bytes, &upload.mime_type)
            .await?;

        self.repository.deactivate_all().await?;

        let saved = self
            .repository
            .insert(&NewCvFile {
                filename: upload.filename,
                file_url,
                file_size,
                mime_type: upload.mime_type,
                is_active: true,
            })
            .await?;

        info!(id = %saved.id, object = %object, size = file_size, "CV uploaded and activated");
        Ok(saved)
    }
}

#[async_trait]
impl<R, S> SetActiveCvUseCase for CvService<R, S>
where
    R: CvFileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        activate_exclusively(&self.repository, id, "CV file").await
    }
}

#[async_trait]
impl<R, S> DeleteCvUseCase for CvService<R, S>
where
    R: CvFileRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        self.repository.delete(id).await?;
        info!(id = %id, "CV file deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::activation::ActiveFlagStore;
    use crate::shared::content::RepositoryError;
    use mockall::{mock, Sequence};

    mock! {
        pub Repo {}

        #[async_trait]
        impl ActiveFlagStore for Repo {
            async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
            async fn deactivate_all(&self) -> Result<(), RepositoryError>;
            async fn activate(&self, id: Uuid) -> Result<(), RepositoryError>;
        }

        #[async_trait]
        impl CvFileRepository for Repo {
            async fn list(&self) -> Result<Vec<CvFile>, RepositoryError>;
            async fn get_active(&self) -> Result<Option<CvFile>, RepositoryError>;
            async fn insert(&self, file: &NewCvFile) -> Result<CvFile, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Storage {}

        #[async_trait]
        impl ObjectStorage for Storage {
            async fn put(
                &self,
                bucket: &str,
                object: &str,
                bytes: Vec<u8>,
                content_type: &str,
            ) -> Result<String, RepositoryError>;
        }
    }

    const URL: &str = "https://demo.supabase.co/storage/v1/object/public/files/cv-1.pdf";

    fn upload() -> CvUpload {
        CvUpload {
            filename: "Resume.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: b"%PDF-1.7".to_vec(),
        }
    }

    fn stored(file: &NewCvFile) -> CvFile {
        CvFile {
            id: Uuid::new_v4(),
            filename: file.filename.clone(),
            file_url: file.file_url.clone(),
            file_size: Some(file.file_size),
            mime_type: Some(file.mime_type.clone()),
            is_active: file.is_active,
            uploaded_at: None,
        }
    }

    #[tokio::test]
    async fn upload_stores_then_deactivates_then_inserts() {
        let mut seq = Sequence::new();
        let mut storage = MockStorage::new();
        storage
            .expect_put()
            .withf(|bucket, object, bytes, content_type| {
                bucket == "files"
                    && object.starts_with("cv-")
                    && object.ends_with(".pdf")
                    && bytes.len() == 8
                    && content_type == "application/pdf"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(URL.to_string()));

        let mut repo = MockRepo::new();
        repo.expect_deactivate_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        repo.expect_insert()
            .withf(|file| file.is_active && file.file_url == URL && file.file_size == 8)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|file| Ok(stored(file)));

        let saved = UploadCvUseCase::execute(&CvService::new(repo, storage), upload())
            .await
            .unwrap();

        assert_eq!(saved.filename, "Resume.pdf");
        assert!(saved.is_active);
    }

    #[tokio::test]
    async fn failed_storage_upload_changes_nothing() {
        let mut storage = MockStorage::new();
        storage
            .expect_put()
            .returning(|_, _, _, _| Err(RepositoryError::Backend("Bucket not found".into())));
        let mut repo = MockRepo::new();
        repo.expect_deactivate_all().never();
        repo.expect_insert().never();

        let err = UploadCvUseCase::execute(&CvService::new(repo, storage), upload())
            .await
            .unwrap_err();

        assert_eq!(err, ContentError::Backend("Bucket not found".into()));
    }

    #[tokio::test]
    async fn set_active_unknown_id_is_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_deactivate_all().never();

        let err = SetActiveCvUseCase::execute(&CvService::new(repo, MockStorage::new()), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, ContentError::not_found("CV file"));
    }

    #[tokio::test]
    async fn get_active_may_be_none() {
        let mut repo = MockRepo::new();
        repo.expect_get_active().returning(|| Ok(None));

        let active = GetActiveCvUseCase::execute(&CvService::new(repo, MockStorage::new()))
            .await
            .unwrap();

        assert_eq!(active, None);
    }
}
