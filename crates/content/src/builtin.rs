//! The document a fresh installation starts from.

use crate::document::{
    AboutSection, ContactSection, ContentDocument, FooterSection, GalleryItem, GallerySection,
    HeroSection, ProgramItem, ProgramSection, TestimonialItem, TestimonialsSection,
};

impl ContentDocument {
    /// Returns the built-in site copy used when no persisted document exists.
    pub fn builtin() -> Self {
        Self {
            hero: HeroSection {
                title: "Bimbel Tuntas, Nilai Pintas.".into(),
                subtitle: "Bimbingan Matematika & IPA oleh Sarjana Fisika.".into(),
                description: "Bimbingan intensif dan personal untuk siswa SD dan SMP. Ubah kesulitan belajar menjadi prestasi nyata, fokus pada pemahaman konsep dasar.".into(),
                whatsapp_number: "6281234567890".into(),
                whatsapp_message: "Halo Kak Nikma, saya tertarik dengan bimbel Belajar Bareng Nikma. Saya ingin mendaftar dan mendapatkan sesi perkenalan gratis.".into(),
            },
            about: AboutSection {
                title: "Kenalan dengan Kak Nikma".into(),
                description1: "Kak Nikma adalah lulusan Sarjana Fisika yang memiliki <span class='font-semibold text-gold'>passion mendalam dalam mengajar Matematika dan IPA (Fisika/Biologi)</span>.".into(),
                description2: "Dengan metode pengajaran yang sabar, terstruktur, dan fokus pada pemecahan masalah, Kak Nikma membantu membangun kepercayaan diri siswa SD dan SMP dalam belajar.".into(),
                description3: "Tujuan utamanya adalah mengubah kesulitan belajar menjadi prestasi nyata melalui pemahaman konsep dasar yang kuat.".into(),
            },
            program: ProgramSection {
                title: "Program Belajar Bareng Nikma".into(),
                sd: ProgramItem {
                    title: "Program SD (Kelas 4-6)".into(),
                    description: "Fokus pada Dasar-dasar Matematika dan Sains.".into(),
                    features: strings(&[
                        "Penguatan Calitung (Catur, Literasi, Hitung)",
                        "Pemahaman konsep dasar Matematika",
                        "Latihan soal rutin",
                    ]),
                },
                smp: ProgramItem {
                    title: "Program SMP (Kelas 7-9)".into(),
                    description: "Fokus pada Matematika dan Fisika.".into(),
                    features: strings(&[
                        "Pemecahan Masalah Aljabar",
                        "Konsep Dasar Fisika",
                        "Persiapan Ujian Sekolah/Daerah",
                    ]),
                },
            },
            gallery: GallerySection {
                title: "Galeri Kegiatan Belajar Bareng Nikma".into(),
                items: [
                    ("Aktivitas Belajar Interaktif", "/assets/images/gallery1.jpg"),
                    ("Murid-Murid Bahagia", "/assets/images/gallery2.jpg"),
                    ("Sesi Belajar Kelompok", "/assets/images/gallery3.jpg"),
                    ("Penghargaan Prestasi", "/assets/images/gallery4.jpg"),
                    ("Kegiatan Praktikum IPA", "/assets/images/gallery5.jpg"),
                    ("Sesi Evaluasi Mingguan", "/assets/images/gallery6.jpg"),
                ]
                .into_iter()
                .map(|(title, image)| GalleryItem {
                    title: title.into(),
                    image: image.into(),
                })
                .collect(),
            },
            testimonials: TestimonialsSection {
                title: "Apa Kata Mereka?".into(),
                items: [
                    (
                        "Nilai matematika adik saya naik drastis setelah les di sini. Kak Nikma sabar dan bisa menjelaskan pelajaran dengan cara yang mudah dimengerti.",
                        "Ortu Murid SD",
                    ),
                    (
                        "Alhamdulillah, anak saya jadi lebih percaya diri saat ujian karena paham konsepnya. Terima kasih Kak Nikma!",
                        "Ortu Murid SMP",
                    ),
                    (
                        "Metode belajarnya seru dan ga bikin bosan. Anak saya malah semangat belajar IPA setiap minggu.",
                        "Ortu Murid SD",
                    ),
                ]
                .into_iter()
                .map(|(text, author)| TestimonialItem {
                    text: text.into(),
                    author: author.into(),
                })
                .collect(),
            },
            contact: ContactSection {
                title: "Hubungi Kami".into(),
                description: "Siap memulai perjalanan belajar yang menyenangkan dan efektif? Hubungi kami melalui WhatsApp!".into(),
                service_area: "Online dan Tatap Muka Area Bunder, Banyuwangi".into(),
                button_text: "Hubungi via WhatsApp".into(),
            },
            footer: FooterSection {
                text: "&copy; 2025 Belajar Bareng Nikma. Hak Cipta Dilindungi.".into(),
            },
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
