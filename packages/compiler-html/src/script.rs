use pagewright_model::{Page, ProjectSettings};

/// Behavior for accordion, tabs and carousel markup
const RUNTIME_JS: &str = r#"// Built-in component interactivity
document.addEventListener('DOMContentLoaded', function() {
  // Accordion
  document.querySelectorAll('.accordion-title').forEach(function(title) {
    title.addEventListener('click', function() {
      var item = title.parentElement;
      var content = title.nextElementSibling;
      item.classList.toggle('open');
      content.style.maxHeight = item.classList.contains('open') ? content.scrollHeight + 'px' : '0px';
    });
  });

  // Tabs
  document.querySelectorAll('.tabs-container').forEach(function(container) {
    container.addEventListener('click', function(e) {
      if (!e.target.matches('.tab-button')) return;
      var index = e.target.dataset.tabIndex;
      container.querySelectorAll('.tab-button').forEach(function(b) { b.classList.remove('active'); });
      e.target.classList.add('active');
      container.querySelectorAll('.tab-content').forEach(function(c) {
        c.classList.toggle('active', c.dataset.tabContent === index);
      });
    });
  });

  // Carousel
  document.querySelectorAll('.carousel-container').forEach(function(container) {
    var track = container.querySelector('.carousel-track');
    if (!track) return;
    var slides = Array.from(track.children);
    if (slides.length === 0) return;
    var currentIndex = 0;

    var goToSlide = function(index) {
      var slideWidth = slides[0].getBoundingClientRect().width;
      track.style.transform = 'translateX(-' + slideWidth * index + 'px)';
      currentIndex = index;
    };

    var nextBtn = container.querySelector('.carousel-next');
    var prevBtn = container.querySelector('.carousel-prev');
    if (nextBtn) nextBtn.addEventListener('click', function() {
      goToSlide((currentIndex + 1) % slides.length);
    });
    if (prevBtn) prevBtn.addEventListener('click', function() {
      goToSlide((currentIndex - 1 + slides.length) % slides.length);
    });
  });
});
"#;

/// Shared `script.js`: the runtime followed by the global custom script
pub fn compile_shared_script(settings: &ProjectSettings) -> String {
    let mut js = String::from(RUNTIME_JS);
    js.push_str("\n// Global Custom JavaScript\n");
    if let Some(global) = &settings.global_js {
        js.push_str(global);
        js.push('\n');
    }
    js
}

/// Inline script for a self-contained page: shared script plus the page's own
pub fn compile_page_script(settings: &ProjectSettings, page: &Page) -> String {
    let mut js = compile_shared_script(settings);
    js.push_str("\n// Page Specific JS\n");
    if let Some(custom) = &page.custom_js {
        js.push_str(custom);
        js.push('\n');
    }
    js
}
